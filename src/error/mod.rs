//! Error types for runshot.

use thiserror::Error;

/// Primary error type for all runshot operations.
#[derive(Error, Debug)]
pub enum RunshotError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Unsupported image '{name}': {reason}")]
    UnsupportedImage { name: String, reason: String },

    #[error("Failed to decode image '{name}': {source}")]
    ImageDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl RunshotError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn unsupported_image(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedImage {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RunshotError>;
