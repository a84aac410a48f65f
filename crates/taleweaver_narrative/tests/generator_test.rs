//! Tests for the story generation service.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use taleweaver_cache::StoryCacheConfig;
use taleweaver_core::{
    Genre, Perspective, PromptPayload, RawGeneration, StoryParams, StorySource,
};
use taleweaver_error::{GenerationError, GenerationErrorKind};
use taleweaver_interface::{GenerationResult, StoryDriver};
use taleweaver_narrative::StoryGenerator;
use taleweaver_rate_limit::RateLimitConfig;
use tokio_util::sync::CancellationToken;

/// Mock driver that returns a fixed response and counts invocations.
struct MockDriver {
    response: String,
    calls: Arc<AtomicUsize>,
}

impl MockDriver {
    fn new(response: &str) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                response: response.to_string(),
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl StoryDriver for MockDriver {
    async fn generate(&self, _prompt: &PromptPayload) -> GenerationResult<RawGeneration> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawGeneration::new(&self.response, "mock-model-v1", None))
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}

/// Mock driver that never completes until cancelled.
struct StalledDriver;

#[async_trait]
impl StoryDriver for StalledDriver {
    async fn generate(&self, _prompt: &PromptPayload) -> GenerationResult<RawGeneration> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(RawGeneration::new("never", "stalled-model", None))
    }

    fn provider_name(&self) -> &'static str {
        "stalled"
    }

    fn model_name(&self) -> &str {
        "stalled-model"
    }
}

/// Mock driver that always fails with the given kind.
struct FailingDriver {
    kind: GenerationErrorKind,
}

#[async_trait]
impl StoryDriver for FailingDriver {
    async fn generate(&self, _prompt: &PromptPayload) -> GenerationResult<RawGeneration> {
        Err(GenerationError::new(self.kind.clone()))
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }

    fn model_name(&self) -> &str {
        "failing-model"
    }
}

fn lighthouse_params() -> StoryParams {
    StoryParams::builder()
        .genre(Genre::Horror)
        .plot("A diary writes itself")
        .perspective(Perspective::FirstPerson)
        .characters("Mara")
        .setting("an abandoned lighthouse")
        .build()
        .expect("valid params")
}

#[tokio::test]
async fn test_generates_normalizes_and_caches() {
    let (driver, calls) = MockDriver::new("**Mara** walked in.\nShe paused.");
    let mut generator = StoryGenerator::new(driver);
    let params = lighthouse_params();

    let response = generator.generate(&params).await.expect("generation");

    assert_eq!(response.story(), "Mara walked in. She paused.");
    assert_eq!(*response.meta().source(), StorySource::Generated);
    assert_eq!(response.meta().model(), "mock-model-v1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(generator.cache().len(), 1);
}

#[tokio::test]
async fn test_token_estimate_when_upstream_reports_none() {
    let raw = "**Mara** walked in.\nShe paused.";
    let (driver, _calls) = MockDriver::new(raw);
    let mut generator = StoryGenerator::new(driver);

    let response = generator
        .generate(&lighthouse_params())
        .await
        .expect("generation");

    // ceil(raw_len / 4), over the raw text, not the normalized one.
    let expected = (raw.len() as u64).div_ceil(4);
    assert_eq!(*response.meta().tokens(), Some(expected));
}

#[tokio::test]
async fn test_cache_hit_skips_driver() {
    let (driver, calls) = MockDriver::new("A short tale.");
    let mut generator = StoryGenerator::new(driver);
    let params = lighthouse_params();

    let first = generator.generate(&params).await.expect("first call");
    let second = generator.generate(&params).await.expect("second call");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.story(), second.story());
    assert_eq!(*second.meta().source(), StorySource::Cache);
}

#[tokio::test]
async fn test_different_params_miss_the_cache() {
    let (driver, calls) = MockDriver::new("A short tale.");
    let mut generator = StoryGenerator::new(driver);

    generator
        .generate(&lighthouse_params())
        .await
        .expect("first call");

    let other = StoryParams::builder()
        .genre(Genre::Horror)
        .plot("A diary writes itself ")
        .perspective(Perspective::FirstPerson)
        .characters("Mara")
        .setting("an abandoned lighthouse")
        .build()
        .expect("valid params");
    generator.generate(&other).await.expect("second call");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_rate_limit_applies_even_to_cache_hits() {
    let (driver, calls) = MockDriver::new("A short tale.");
    let config = RateLimitConfig::default().with_max_requests(2);
    let mut generator =
        StoryGenerator::with_config(driver, config, StoryCacheConfig::default());
    let params = lighthouse_params();

    generator.generate(&params).await.expect("fresh call");
    let cached = generator.generate(&params).await.expect("cached call");
    assert_eq!(*cached.meta().source(), StorySource::Cache);

    let rejected = generator.generate(&params).await;
    match rejected {
        Err(err) => assert!(matches!(
            err.kind,
            GenerationErrorKind::RateLimitExceeded { .. }
        )),
        Ok(_) => panic!("third call should be rejected"),
    }

    // The rejected call never reached the driver.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_driver_failure_is_not_cached() {
    let driver = FailingDriver {
        kind: GenerationErrorKind::Upstream {
            status: Some(503),
            message: "overloaded".to_string(),
        },
    };
    let mut generator = StoryGenerator::new(driver);

    let result = generator.generate(&lighthouse_params()).await;
    match result {
        Err(err) => match err.kind {
            GenerationErrorKind::Upstream { status, message } => {
                assert_eq!(status, Some(503));
                assert_eq!(message, "overloaded");
            }
            other => panic!("unexpected kind: {:?}", other),
        },
        Ok(_) => panic!("driver failure should propagate"),
    }

    assert!(generator.cache().is_empty());
}

#[tokio::test]
async fn test_cancellation_fails_without_caching() {
    let mut generator = StoryGenerator::new(StalledDriver);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = generator
        .generate_with_cancel(&lighthouse_params(), &cancel)
        .await;

    match result {
        Err(err) => assert!(matches!(err.kind, GenerationErrorKind::Cancelled)),
        Ok(_) => panic!("cancelled call should fail"),
    }

    // No cache write; the consumed admission is not refunded.
    assert!(generator.cache().is_empty());
    assert_eq!(generator.window().admitted_count(), 1);
}

#[tokio::test]
async fn test_cancel_token_untriggered_completes_normally() {
    let (driver, _calls) = MockDriver::new("A short tale.");
    let mut generator = StoryGenerator::new(driver);
    let cancel = CancellationToken::new();

    let response = generator
        .generate_with_cancel(&lighthouse_params(), &cancel)
        .await
        .expect("generation");

    assert_eq!(response.story(), "A short tale.");
}
