//! Story generation error types.

use crate::{GeminiError, GeminiErrorKind};
use std::time::Duration;

/// Specific error conditions for story generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenerationErrorKind {
    /// The 60-second request quota was exhausted
    RateLimitExceeded {
        /// Time until the oldest admitted call ages out of the window
        retry_after: Option<Duration>,
    },
    /// Transport failure or non-success status from the upstream endpoint
    Upstream {
        /// HTTP status code, when a response was received
        status: Option<u16>,
        /// Upstream-provided message, or a generic one
        message: String,
    },
    /// Success status but the response body lacked the expected text payload
    MalformedResponse(String),
    /// The caller cancelled the in-flight request
    Cancelled,
}

impl std::fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationErrorKind::RateLimitExceeded { retry_after } => match retry_after {
                Some(wait) => write!(
                    f,
                    "Rate limit exceeded, retry in {}s",
                    wait.as_secs_f64().ceil() as u64
                ),
                None => write!(f, "Rate limit exceeded"),
            },
            GenerationErrorKind::Upstream { status, message } => match status {
                Some(code) => write!(f, "Upstream error (status {}): {}", code, message),
                None => write!(f, "Upstream error: {}", message),
            },
            GenerationErrorKind::MalformedResponse(msg) => {
                write!(f, "Malformed upstream response: {}", msg)
            }
            GenerationErrorKind::Cancelled => write!(f, "Request cancelled by caller"),
        }
    }
}

/// Story generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use taleweaver_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Cancelled);
/// assert!(format!("{}", err).contains("cancelled"));
/// ```
#[derive(Debug, Clone)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GenerationError {}

impl From<GeminiError> for GenerationError {
    /// Collapse wire-level failures into the generation taxonomy.
    ///
    /// HTTP transport and API-status failures become `Upstream`; a body that
    /// parsed as success but lacked the expected shape becomes
    /// `MalformedResponse`. Client construction and credential errors have no
    /// upstream status and surface as transport-level `Upstream` failures.
    #[track_caller]
    fn from(err: GeminiError) -> Self {
        let kind = match err.kind {
            GeminiErrorKind::Api { status, message } => GenerationErrorKind::Upstream {
                status: Some(status),
                message: if message.is_empty() {
                    "Failed to generate story".to_string()
                } else {
                    message
                },
            },
            GeminiErrorKind::Http(message) => GenerationErrorKind::Upstream {
                status: None,
                message,
            },
            GeminiErrorKind::ResponseParsing(message) => {
                GenerationErrorKind::MalformedResponse(message)
            }
            other => GenerationErrorKind::Upstream {
                status: None,
                message: other.to_string(),
            },
        };
        GenerationError::new(kind)
    }
}
