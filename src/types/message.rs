//! Message types for model communication.

use serde::{Deserialize, Serialize};

use super::image::UploadedImage;

/// A message sent to the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl ModelMessage {
    /// Create a user message: the text part first, then every image in order.
    pub fn user_with_images(text: impl Into<String>, images: &[UploadedImage]) -> Self {
        let mut content = Vec::with_capacity(images.len() + 1);
        content.push(ContentPart::Text { text: text.into() });
        content.extend(images.iter().map(|img| ContentPart::Image(ImageContent::from(img))));
        Self {
            role: Role::User,
            content,
        }
    }

    /// Extract the text content, concatenating all text parts.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageContent> {
        self.content.iter().filter_map(|part| match part {
            ContentPart::Image(img) => Some(img),
            _ => None,
        })
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single part of message content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    Image(ImageContent),
}

/// Base64 image content embedded in a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageContent {
    pub data: String,
    pub mime_type: String,
}

impl From<&UploadedImage> for ImageContent {
    fn from(img: &UploadedImage) -> Self {
        Self {
            data: img.to_base64(),
            mime_type: img.mime_type().to_string(),
        }
    }
}
