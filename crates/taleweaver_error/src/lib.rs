//! Error types for the Taleweaver story generation library.
//!
//! Each domain gets its own `*ErrorKind` enum paired with an error struct
//! that records the source location where the error was created.

mod gemini;
mod generation;

pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};

/// Result type alias for taleweaver operations.
pub type TaleweaverResult<T> = Result<T, TaleweaverError>;

/// Top-level error type aggregating all taleweaver error domains.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TaleweaverError {
    /// Gemini client error.
    #[display("{_0}")]
    Gemini(GeminiError),
    /// Story generation error.
    #[display("{_0}")]
    Generation(GenerationError),
}
