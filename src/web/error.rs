//! HTTP rendering of [`RunshotError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::error::RunshotError;

impl RunshotError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UnsupportedImage { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::ModelNotFound(_)
            | Self::ImageDecode { .. }
            | Self::InvalidArgument(_)
            | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Api { .. } | Self::Network(_) => StatusCode::BAD_GATEWAY,
            Self::Configuration(_) | Self::Io(_) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RunshotError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(%status, error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}
