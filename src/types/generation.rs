//! Generation outcome types.

use serde::{Deserialize, Serialize};

use super::usage::Usage;
use crate::models::GeminiModel;

/// Why the model stopped generating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Other,
}

/// The model's answer for one conversion.
///
/// `text` is shown exactly as returned; the other fields are only logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceResult {
    pub model: GeminiModel,
    pub text: String,
    #[serde(default)]
    pub usage: Usage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}
