//! Convenience re-exports for common use.

pub use crate::collector::ImageCollector;
pub use crate::config::RunshotConfig;
pub use crate::error::{Result, RunshotError};
pub use crate::models::GeminiModel;
pub use crate::preview::PreviewLayout;
pub use crate::prompt::PromptTemplate;
pub use crate::provider::ModelProvider;
pub use crate::types::{ContentPart, InferenceResult, ModelMessage, UploadedImage};
