//! Gemini API configuration.

use std::time::Duration;
use taleweaver_error::{GeminiError, GeminiErrorKind};

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Default API endpoint.
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable holding the API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini API configuration.
///
/// The API key is provisioned at construction time from the caller or the
/// environment; it is sent as a request header and never logged.
///
/// # Examples
///
/// ```
/// use taleweaver_models::GeminiConfig;
///
/// let config = GeminiConfig::builder()
///     .api_key("secret")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gemini-1.5-flash-latest");
/// ```
#[derive(Clone, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// API key; treated as an opaque secret
    api_key: String,
    /// Model identifier appended to the endpoint path
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base endpoint for the generative-language API
    #[builder(default = "DEFAULT_ENDPOINT.to_string()")]
    endpoint: String,
    /// Request timeout
    #[builder(default = "Duration::from_secs(DEFAULT_TIMEOUT_SECS)")]
    timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    /// The API key is redacted; it must never reach logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GeminiConfig {
    /// Creates a builder for GeminiConfig.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Builds a configuration with the API key read from `GEMINI_API_KEY`,
    /// loading a local `.env` file first when one exists.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the variable is unset or empty.
    pub fn from_env() -> Result<Self, GeminiError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        GeminiConfig::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))
    }
}
