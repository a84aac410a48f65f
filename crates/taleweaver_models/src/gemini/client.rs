//! Gemini HTTP client.

use super::config::GeminiConfig;
use super::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use taleweaver_core::{PromptPayload, RawGeneration};
use taleweaver_error::{GeminiError, GeminiErrorKind, GenerationError};
use taleweaver_interface::{GenerationResult, StoryDriver};
use tracing::{debug, error, instrument};

/// Generic upstream failure message when the API reports none.
const GENERIC_FAILURE: &str = "Failed to generate story";

/// HTTP client for the Gemini generative-language API.
///
/// Issues one `generateContent` call per request and maps transport, status,
/// and response-shape failures into the error taxonomy. The API key travels
/// in the `x-goog-api-key` header, never in the URL, and is skipped from all
/// instrumentation.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .timeout(*config.timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %config.model(), "Created Gemini client");

        Ok(Self { client, config })
    }

    /// Creates a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when `GEMINI_API_KEY` is unset.
    pub fn from_env() -> Result<Self, GeminiError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Sends a generation request and returns the parsed response body.
    ///
    /// # Errors
    ///
    /// `Http` on transport failure, `Api` on a non-success status (carrying
    /// the upstream message when one was provided), `ResponseParsing` when a
    /// success body cannot be decoded.
    #[instrument(skip(self, payload), fields(model = %self.config.model()))]
    pub async fn generate_content(
        &self,
        payload: &PromptPayload,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!(
            "{}/{}:generateContent",
            self.config.endpoint(),
            self.config.model()
        );
        let request = GenerateContentRequest::from_payload(payload);

        debug!(
            multimodal = payload.image().is_some(),
            prompt_chars = payload.text().len(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .and_then(|detail| detail.message)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());

            error!(status = %status, message = %message, "API error");

            return Err(GeminiError::new(GeminiErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            error!(error = %e, "Failed to parse response body");
            GeminiError::new(GeminiErrorKind::ResponseParsing(e.to_string()))
        })
    }
}

#[async_trait]
impl StoryDriver for GeminiClient {
    async fn generate(&self, prompt: &PromptPayload) -> GenerationResult<RawGeneration> {
        let response = self
            .generate_content(prompt)
            .await
            .map_err(GenerationError::from)?;

        let text = response.first_text().ok_or_else(|| {
            GenerationError::from(GeminiError::new(GeminiErrorKind::ResponseParsing(
                "response contained no candidate text".to_string(),
            )))
        })?;

        debug!(
            response_chars = text.len(),
            total_tokens = ?response.total_tokens(),
            "Received generation"
        );

        Ok(RawGeneration::new(
            text,
            self.config.model().clone(),
            response.total_tokens(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
