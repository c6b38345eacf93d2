//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::RunshotError;
use crate::models::GeminiModel;
use crate::types::{ContentPart, FinishReason, Role, Usage};

use super::http::shared_client;
use super::{ModelProvider, ProviderRequest, ProviderResponse};

pub struct GoogleProvider {
    model: GeminiModel,
    api_key: Option<String>,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(model: GeminiModel, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            model,
            api_key,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model.as_str()
        )
    }

    pub(crate) fn build_request_body(&self, request: &ProviderRequest) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                };
                serde_json::json!({
                    "role": role,
                    "parts": build_gemini_parts(&msg.content),
                })
            })
            .collect();

        serde_json::json!({ "contents": contents })
    }
}

#[async_trait]
impl ModelProvider for GoogleProvider {
    fn model(&self) -> GeminiModel {
        self.model
    }

    async fn generate_text(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, RunshotError> {
        let body = self.build_request_body(request);

        debug!(model = self.model.as_str(), "Google generate_text");

        let mut builder = shared_client().post(self.endpoint()).json(&body);
        // Without a key the request still goes out; Google answers with an auth error.
        if let Some(ref key) = self.api_key {
            builder = builder.query(&[("key", key)]);
        }
        let resp = builder.send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = match resp.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(status, error = %e, "failed to read Gemini error body");
                    String::new()
                }
            };
            return Err(super::http::status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| RunshotError::api(200, "No candidates in Gemini response"))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let finish_reason = candidate.finish_reason.as_deref().map(|r| match r {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::Length,
            "SAFETY" | "PROHIBITED_CONTENT" | "BLOCKLIST" => FinishReason::ContentFilter,
            _ => FinishReason::Other,
        });

        let usage = data
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(ProviderResponse {
            text,
            usage,
            finish_reason,
        })
    }
}

fn build_gemini_parts(content: &[ContentPart]) -> Vec<serde_json::Value> {
    content
        .iter()
        .map(|part| match part {
            ContentPart::Text { text } => serde_json::json!({"text": text}),
            ContentPart::Image(img) => serde_json::json!({
                "inlineData": {
                    "mimeType": img.mime_type,
                    "data": img.data,
                }
            }),
        })
        .collect()
}

// Internal Gemini response types

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::image::test_support::{jpeg, png};
    use crate::types::{ModelMessage, UploadedImage};
    use pretty_assertions::assert_eq;

    #[test]
    fn body_has_prompt_then_images_in_order() {
        let images = vec![
            UploadedImage::decode("a.png", png(1, 1)).unwrap(),
            UploadedImage::decode("b.jpg", jpeg(1, 1)).unwrap(),
        ];
        let provider = GoogleProvider::new(GeminiModel::Gemini25FlashLite, None, "http://x");
        let request = ProviderRequest {
            messages: vec![ModelMessage::user_with_images("PROMPT", &images)],
        };

        let body = provider.build_request_body(&request);
        let parts = body["contents"][0]["parts"].as_array().unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0]["text"], "PROMPT");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], images[0].to_base64());
        assert_eq!(parts[2]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[2]["inlineData"]["data"], images[1].to_base64());
    }

    #[test]
    fn endpoint_uses_model_id() {
        let provider =
            GoogleProvider::new(GeminiModel::Gemini3FlashPreview, None, "http://host/v1beta/");
        assert_eq!(
            provider.endpoint(),
            "http://host/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
