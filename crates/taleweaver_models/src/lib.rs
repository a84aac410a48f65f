//! LLM provider integrations for Taleweaver.
//!
//! Currently ships the Gemini generative-language backend; additional
//! providers implement [`taleweaver_interface::StoryDriver`] the same way.

mod gemini;

pub use gemini::{
    Candidate, CandidateContent, Content, GeminiClient, GeminiConfig, GeminiConfigBuilder,
    GenerateContentRequest, GenerateContentResponse, InlineData, Part, ResponsePart,
    UsageMetadata,
};
