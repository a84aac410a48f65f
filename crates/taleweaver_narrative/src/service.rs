//! The story generation service.

use crate::normalize_story;
use chrono::Utc;
use std::time::Instant;
use taleweaver_cache::{StoryCache, StoryCacheConfig};
use taleweaver_core::{RawGeneration, StoryMeta, StoryParams, StoryResponse, StorySource};
use taleweaver_error::{GenerationError, GenerationErrorKind};
use taleweaver_interface::{GenerationResult, StoryDriver};
use taleweaver_prompt::StoryPrompt;
use taleweaver_rate_limit::{RateLimitConfig, RequestWindow};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

/// Orchestrates story generation over a [`StoryDriver`] backend.
///
/// Owns the request window and response cache, so each generator instance
/// is an independent session context: multi-tenant deployments construct
/// one per user rather than sharing process-wide state.
///
/// One call makes at most one cache write, one rate-window append, and one
/// upstream request. Failures are never retried here; retry is an explicit
/// second call from the caller.
pub struct StoryGenerator<D: StoryDriver> {
    driver: D,
    window: RequestWindow,
    cache: StoryCache,
}

impl<D: StoryDriver> StoryGenerator<D> {
    /// Create a generator with default rate limits and cache bounds.
    pub fn new(driver: D) -> Self {
        Self::with_config(driver, RateLimitConfig::default(), StoryCacheConfig::default())
    }

    /// Create a generator with explicit rate-limit and cache configuration.
    pub fn with_config(
        driver: D,
        rate_config: RateLimitConfig,
        cache_config: StoryCacheConfig,
    ) -> Self {
        Self {
            driver,
            window: RequestWindow::new(rate_config),
            cache: StoryCache::new(cache_config),
        }
    }

    /// Get a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the response cache.
    pub fn cache(&self) -> &StoryCache {
        &self.cache
    }

    /// Get a reference to the request window.
    pub fn window(&self) -> &RequestWindow {
        &self.window
    }

    /// Generate a story for the given parameters.
    ///
    /// Admission is checked first: a rejected call fails immediately without
    /// touching the network or bypassing the cache. A cache hit returns the
    /// stored story tagged with cache provenance and skips prompt building
    /// and the upstream call entirely. On a miss, the built prompt goes to
    /// the driver once; the raw text is normalized, cached, and returned
    /// with best-effort metadata.
    ///
    /// # Errors
    ///
    /// `RateLimitExceeded` when the window quota is exhausted, `Upstream`
    /// on transport or status failures, `MalformedResponse` when the
    /// upstream body lacks the expected text payload.
    #[instrument(skip(self, params), fields(provider = self.driver.provider_name()))]
    pub async fn generate(&mut self, params: &StoryParams) -> GenerationResult<StoryResponse> {
        self.admit()?;

        let (key, cached) = self.lookup(params);
        if let Some(response) = cached {
            return Ok(response);
        }

        let prompt = StoryPrompt::build(params);
        let raw = self.driver.generate(&prompt).await?;

        Ok(self.finish(key, &raw))
    }

    /// Generate a story, racing the upstream call against cancellation.
    ///
    /// A cancelled attempt fails with `Cancelled` and never writes the
    /// cache; the rate-window admission consumed before the upstream call
    /// is not refunded.
    ///
    /// # Errors
    ///
    /// As [`generate`](Self::generate), plus `Cancelled` when the token
    /// fires before the upstream call completes.
    #[instrument(skip(self, params, cancel), fields(provider = self.driver.provider_name()))]
    pub async fn generate_with_cancel(
        &mut self,
        params: &StoryParams,
        cancel: &CancellationToken,
    ) -> GenerationResult<StoryResponse> {
        self.admit()?;

        let (key, cached) = self.lookup(params);
        if let Some(response) = cached {
            return Ok(response);
        }

        let prompt = StoryPrompt::build(params);
        let raw = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Generation cancelled by caller");
                return Err(GenerationError::new(GenerationErrorKind::Cancelled));
            }
            result = self.driver.generate(&prompt) => result?,
        };

        Ok(self.finish(key, &raw))
    }

    /// Consume one admission slot or fail with the rate-limit error.
    fn admit(&mut self) -> GenerationResult<()> {
        let now = Instant::now();
        if self.window.try_admit(now) {
            return Ok(());
        }

        let retry_after = self.window.retry_after(now);
        warn!(?retry_after, "Request rejected by rate limiter");
        Err(GenerationError::new(
            GenerationErrorKind::RateLimitExceeded { retry_after },
        ))
    }

    /// Compute the cache key and look up a stored story.
    fn lookup(&mut self, params: &StoryParams) -> (String, Option<StoryResponse>) {
        let key = StoryCache::make_key(params);

        let cached = self.cache.get(&key).map(|story| {
            let meta = StoryMeta::new(
                self.driver.model_name(),
                None,
                Utc::now(),
                StorySource::Cache,
            );
            StoryResponse::new(story, meta)
        });

        if cached.is_some() {
            debug!("Serving story from cache");
        }

        (key, cached)
    }

    /// Normalize, cache, and package a fresh generation.
    fn finish(&mut self, key: String, raw: &RawGeneration) -> StoryResponse {
        let tokens = raw
            .total_tokens()
            .unwrap_or_else(|| (raw.text().len() as u64).div_ceil(4));

        let story = normalize_story(raw.text());
        self.cache.insert(key, story.clone());

        debug!(tokens, story_chars = story.len(), "Generated story");

        let meta = StoryMeta::new(
            raw.model().as_str(),
            Some(tokens),
            Utc::now(),
            StorySource::Generated,
        );
        StoryResponse::new(story, meta)
    }
}
