//! The inference invoker: prompt + ordered screenshots → one model call → text.

use tracing::{debug, info};

use crate::config::RunshotConfig;
use crate::error::RunshotError;
use crate::models::GeminiModel;
use crate::provider::{self, ModelProvider, ProviderRequest};
use crate::types::{InferenceResult, ModelMessage, UploadedImage};

/// Build the single request for a conversion.
///
/// One user message: the prompt text first, then every image in upload order.
pub fn build_request(prompt: &str, images: &[UploadedImage]) -> ProviderRequest {
    ProviderRequest {
        messages: vec![ModelMessage::user_with_images(prompt, images)],
    }
}

/// Send `prompt` and `images` to `provider` exactly once and return its text untouched.
///
/// Nothing is retried and the text is never parsed.
pub async fn convert_session(
    provider: &dyn ModelProvider,
    prompt: &str,
    images: &[UploadedImage],
) -> Result<InferenceResult, RunshotError> {
    let request = build_request(prompt, images);

    debug!(
        model = provider.model().as_str(),
        images = images.len(),
        "convert_session: calling provider"
    );
    let response = provider.generate_text(&request).await?;

    info!(
        model = provider.model().as_str(),
        input_tokens = response.usage.input_tokens,
        output_tokens = response.usage.output_tokens,
        finish_reason = ?response.finish_reason,
        "conversion finished"
    );

    Ok(InferenceResult {
        model: provider.model(),
        text: response.text,
        usage: response.usage,
        finish_reason: response.finish_reason,
    })
}

/// Convert with the Gemini provider built from `config`, using its configured prompt.
pub async fn convert(
    model: GeminiModel,
    config: &RunshotConfig,
    images: &[UploadedImage],
) -> Result<InferenceResult, RunshotError> {
    let provider = provider::create_provider(model, config);
    convert_session(provider.as_ref(), config.prompt().text(), images).await
}
