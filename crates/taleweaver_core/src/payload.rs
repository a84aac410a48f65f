//! Prompt payload types.

use crate::StoryImage;
use serde::{Deserialize, Serialize};

/// The instruction sent to the generation service.
///
/// Text-mode requests carry a single instruction string; multimodal requests
/// pair the instruction with an inline image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PromptPayload {
    /// Plain instruction text.
    Text(String),
    /// Instruction text plus an inline image.
    TextWithImage {
        /// The instruction text
        text: String,
        /// The inline image
        image: StoryImage,
    },
}

impl PromptPayload {
    /// The instruction text, regardless of mode.
    pub fn text(&self) -> &str {
        match self {
            PromptPayload::Text(text) => text,
            PromptPayload::TextWithImage { text, .. } => text,
        }
    }

    /// The inline image, when present.
    pub fn image(&self) -> Option<&StoryImage> {
        match self {
            PromptPayload::Text(_) => None,
            PromptPayload::TextWithImage { image, .. } => Some(image),
        }
    }
}
