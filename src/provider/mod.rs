//! Model provider trait and the Gemini implementation.

pub mod google;
pub mod http;

use async_trait::async_trait;

use crate::config::RunshotConfig;
use crate::error::RunshotError;
use crate::models::GeminiModel;
use crate::types::{FinishReason, ModelMessage, Usage};

/// A request sent to a model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub messages: Vec<ModelMessage>,
}

/// Response from a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderResponse {
    pub text: String,
    pub usage: Usage,
    pub finish_reason: Option<FinishReason>,
}

/// Seam between the inference invoker and the remote model API.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// The model this provider instance serves.
    fn model(&self) -> GeminiModel;

    /// Issue exactly one generation request.
    async fn generate_text(&self, request: &ProviderRequest)
        -> Result<ProviderResponse, RunshotError>;
}

/// Create the provider for `model` using `config`.
pub fn create_provider(model: GeminiModel, config: &RunshotConfig) -> Box<dyn ModelProvider> {
    Box::new(google::GoogleProvider::new(
        model,
        config.api_key().map(str::to_string),
        config.base_url(),
    ))
}
