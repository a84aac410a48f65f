//! Response types for story generation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw output from a generation backend, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RawGeneration {
    /// The generated text, exactly as the backend returned it
    text: String,
    /// Identifier of the model that produced the text
    model: String,
    /// Total token count, when the backend reports one
    total_tokens: Option<u64>,
}

impl RawGeneration {
    /// Creates a new raw generation result.
    pub fn new(text: impl Into<String>, model: impl Into<String>, total_tokens: Option<u64>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            total_tokens,
        }
    }
}

/// Where a returned story came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorySource {
    /// Freshly generated by the upstream service.
    Generated,
    /// Served from the in-session response cache.
    Cache,
}

/// Best-effort metadata attached to a generated story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryMeta {
    /// Identifier of the model behind the result
    model: String,
    /// Token count: upstream-reported, or estimated as `ceil(raw_len / 4)`
    tokens: Option<u64>,
    /// When the result was produced
    timestamp: DateTime<Utc>,
    /// Provenance of the story text
    source: StorySource,
}

impl StoryMeta {
    /// Creates metadata for a result.
    pub fn new(
        model: impl Into<String>,
        tokens: Option<u64>,
        timestamp: DateTime<Utc>,
        source: StorySource,
    ) -> Self {
        Self {
            model: model.into(),
            tokens,
            timestamp,
            source,
        }
    }
}

/// A normalized story plus its metadata.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use taleweaver_core::{StoryMeta, StoryResponse, StorySource};
///
/// let meta = StoryMeta::new("gemini-1.5-flash-latest", Some(42), Utc::now(), StorySource::Generated);
/// let response = StoryResponse::new("Once upon a time.", meta);
/// assert_eq!(response.story(), "Once upon a time.");
/// assert_eq!(*response.meta().source(), StorySource::Generated);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct StoryResponse {
    /// The normalized story text
    story: String,
    /// Best-effort generation metadata
    meta: StoryMeta,
}

impl StoryResponse {
    /// Creates a new story response.
    pub fn new(story: impl Into<String>, meta: StoryMeta) -> Self {
        Self {
            story: story.into(),
            meta,
        }
    }
}
