//! Gemini API request and response types.

use serde::{Deserialize, Serialize};
use taleweaver_core::PromptPayload;

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single-turn request carries one entry
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Builds the wire request for a prompt payload.
    ///
    /// Text mode produces a lone text part; multimodal mode pairs the text
    /// part with an `inline_data` part carrying the bare base64 payload and
    /// its MIME type.
    pub fn from_payload(payload: &PromptPayload) -> Self {
        let parts = match payload {
            PromptPayload::Text(text) => vec![Part::Text { text: text.clone() }],
            PromptPayload::TextWithImage { text, image } => vec![
                Part::Text { text: text.clone() },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type().clone(),
                        data: image.data().clone(),
                    },
                },
            ],
        };

        Self {
            contents: vec![Content { parts }],
        }
    }
}

/// One content entry in a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Parts making up this entry
    pub parts: Vec<Part>,
}

/// A single request part: text or inline media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text part.
    Text {
        /// Instruction text
        text: String,
    },
    /// Inline media part.
    InlineData {
        /// The media payload
        inline_data: InlineData,
    },
}

/// Inline media payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Bare base64 payload (no data-URL header)
    pub data: String,
}

/// Response body from the `generateContent` endpoint.
///
/// Every level is optional; `first_text` walks the expected
/// candidate/content/parts/text shape and reports absence rather than
/// panicking on a surprising body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateContentResponse {
    /// Generation candidates
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    /// Token accounting, when reported
    #[serde(default, rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// The first candidate's first text part, when the response has the
    /// expected shape.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_deref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_deref()?
            .first()?
            .text
            .as_deref()
    }

    /// Upstream-reported total token count, when present.
    pub fn total_tokens(&self) -> Option<u64> {
        self.usage_metadata
            .as_ref()
            .and_then(|usage| usage.total_token_count)
    }
}

/// One generation candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    /// Candidate content
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CandidateContent {
    /// Response parts
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

/// One response part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponsePart {
    /// Generated text
    #[serde(default)]
    pub text: Option<String>,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsageMetadata {
    /// Total tokens consumed by the request
    #[serde(default, rename = "totalTokenCount")]
    pub total_token_count: Option<u64>,
}

/// Error body returned alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}
