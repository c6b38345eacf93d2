//! The closed set of selectable Gemini models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::RunshotError;

/// Gemini models offered in the model-selection sidebar.
///
/// Both behave identically from the caller's side; they differ only in cost
/// and availability.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum GeminiModel {
    #[default]
    #[strum(serialize = "gemini-3-flash-preview")]
    #[serde(rename = "gemini-3-flash-preview")]
    Gemini3FlashPreview,
    #[strum(serialize = "gemini-2.5-flash-lite")]
    #[serde(rename = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,
}

impl GeminiModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini3FlashPreview => "gemini-3-flash-preview",
            Self::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }

    /// Static informational text shown under the selector.
    pub fn info(&self) -> &'static str {
        match self {
            Self::Gemini3FlashPreview => "you choose gemini-3-flash-preview, it's free",
            Self::Gemini25FlashLite => "you choose gemini-2.5-flash-lite, it's really cheap",
        }
    }

    /// All selectable models, in sidebar order.
    pub fn all() -> Vec<GeminiModel> {
        Self::iter().collect()
    }

    /// Parse a model id, accepting an optional `google:`/`gemini:` provider prefix.
    pub fn parse(s: &str) -> Result<GeminiModel, RunshotError> {
        let id = s
            .strip_prefix("google:")
            .or_else(|| s.strip_prefix("gemini:"))
            .unwrap_or(s)
            .trim();
        id.parse::<GeminiModel>().map_err(|_| {
            let known = Self::iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
            RunshotError::ModelNotFound(format!("'{s}' (expected one of: {known})"))
        })
    }
}
