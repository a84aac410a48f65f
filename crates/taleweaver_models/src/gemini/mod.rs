mod client;
mod config;
mod types;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GeminiConfigBuilder};
pub use types::{
    Candidate, CandidateContent, Content, GenerateContentRequest, GenerateContentResponse,
    InlineData, Part, ResponsePart, UsageMetadata,
};
