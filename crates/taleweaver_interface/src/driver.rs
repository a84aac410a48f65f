//! Story driver trait definitions.

use async_trait::async_trait;
use taleweaver_core::{PromptPayload, RawGeneration};
use taleweaver_error::GenerationError;

/// Result type for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// A text-generation backend capable of turning a prompt into a story.
///
/// This is the seam between the orchestrator and any concrete provider;
/// tests substitute mock drivers, production uses the Gemini client.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate raw story text for the given prompt payload.
    ///
    /// Implementations issue exactly one upstream call per invocation and
    /// map transport, status, and response-shape failures into the
    /// generation error taxonomy.
    async fn generate(&self, prompt: &PromptPayload) -> GenerationResult<RawGeneration>;

    /// Name of the backing provider, for logging.
    fn provider_name(&self) -> &'static str;

    /// Identifier of the model this driver targets.
    fn model_name(&self) -> &str;
}
