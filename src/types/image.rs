//! Uploaded screenshot images.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::RunshotError;

/// Image formats the upload control accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    fn from_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            image::ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    fn from_extension(name: &str) -> Option<Option<Self>> {
        let (_, ext) = name.rsplit_once('.')?;
        Some(match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        })
    }
}

/// A decoded JPEG/PNG screenshot, kept only for the lifetime of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub name: String,
    pub kind: ImageKind,
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl UploadedImage {
    /// Sniff and fully decode `data`.
    ///
    /// Files whose name carries an extension other than jpg/jpeg/png are
    /// rejected before decoding; content is sniffed either way.
    pub fn decode(name: impl Into<String>, data: Vec<u8>) -> Result<Self, RunshotError> {
        let name = name.into();

        if let Some(None) = ImageKind::from_extension(&name) {
            return Err(RunshotError::unsupported_image(
                name,
                "only .jpg, .jpeg and .png files are accepted",
            ));
        }

        let format = image::guess_format(&data)
            .map_err(|source| RunshotError::ImageDecode { name: name.clone(), source })?;
        let kind = ImageKind::from_format(format).ok_or_else(|| {
            RunshotError::unsupported_image(name.clone(), format!("{format:?} is not JPEG or PNG"))
        })?;

        let decoded = image::load_from_memory_with_format(&data, format)
            .map_err(|source| RunshotError::ImageDecode { name: name.clone(), source })?;

        Ok(Self {
            name,
            kind,
            width: decoded.width(),
            height: decoded.height(),
            data,
        })
    }

    /// Rebuild an image from a `data:image/...;base64,` URI produced by [`Self::data_uri`].
    pub fn from_data_uri(name: impl Into<String>, uri: &str) -> Result<Self, RunshotError> {
        let name = name.into();
        let payload = uri
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, b64)| b64)
            .ok_or_else(|| RunshotError::unsupported_image(name.clone(), "not a base64 data URI"))?;
        let data = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|e| RunshotError::unsupported_image(name.clone(), e.to_string()))?;
        Self::decode(name, data)
    }

    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.to_base64())
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}
