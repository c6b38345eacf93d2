//! Shared test helpers: in-memory screenshots, a capturing provider, multipart bodies.
#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Mutex;

use async_trait::async_trait;
use image::{ImageBuffer, ImageFormat, Rgb};

use runshot::error::RunshotError;
use runshot::models::GeminiModel;
use runshot::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use runshot::types::{FinishReason, Usage};

/// Encode a solid-colour image; `shade` makes otherwise equal images distinguishable.
pub fn encode(width: u32, height: u32, shade: u8, format: ImageFormat) -> Vec<u8> {
    let buffer = ImageBuffer::from_pixel(width, height, Rgb([shade, 255 - shade, shade / 2]));
    let mut out = Cursor::new(Vec::new());
    buffer.write_to(&mut out, format).unwrap();
    out.into_inner()
}

pub fn jpeg(shade: u8) -> Vec<u8> {
    encode(6, 12, shade, ImageFormat::Jpeg)
}

pub fn png(shade: u8) -> Vec<u8> {
    encode(12, 6, shade, ImageFormat::Png)
}

pub fn base64(data: &[u8]) -> String {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// A provider that records requests and answers with queued text.
pub struct CaptureProvider {
    model: GeminiModel,
    responses: Mutex<Vec<Result<ProviderResponse, RunshotError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl CaptureProvider {
    pub fn new(model: GeminiModel) -> Self {
        Self {
            model,
            responses: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_response(&self, text: &str) {
        self.responses.lock().unwrap().push(Ok(ProviderResponse {
            text: text.to_string(),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            finish_reason: Some(FinishReason::Stop),
        }));
    }

    pub fn queue_error(&self, err: RunshotError) {
        self.responses.lock().unwrap().push(Err(err));
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for CaptureProvider {
    fn model(&self) -> GeminiModel {
        self.model
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, RunshotError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(ProviderResponse {
                text: "{}".to_string(),
                usage: Usage::default(),
                finish_reason: Some(FinishReason::Stop),
            });
        }
        responses.remove(0)
    }
}

/// One part of a multipart/form-data body.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a str, &'a [u8]),
}

pub const BOUNDARY: &str = "runshot-test-boundary";

/// Returns the content-type header value and the encoded body.
pub fn multipart(parts: &[Part<'_>]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, mime, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {mime}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

/// A minimal successful `generateContent` response.
pub fn gemini_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 1200,
            "candidatesTokenCount": 300,
            "totalTokenCount": 1500
        }
    })
}
