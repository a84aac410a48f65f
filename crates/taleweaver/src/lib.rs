//! Taleweaver: story generation over generative-language APIs.
//!
//! Turns a structured parameter record into a natural-language (or
//! multimodal) prompt, guards upstream calls with a sliding-window rate
//! limiter, memoizes normalized results in an exact-match cache, and
//! surfaces failures as a typed taxonomy.
//!
//! # Examples
//!
//! ```no_run
//! use taleweaver::{GeminiClient, Genre, StoryGenerator, StoryParams};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env()?;
//! let mut generator = StoryGenerator::new(client);
//!
//! let params = StoryParams::builder()
//!     .genre(Genre::Horror)
//!     .plot("A diary writes itself")
//!     .build()?;
//!
//! let response = generator.generate(&params).await?;
//! println!("{}", response.story());
//! # Ok(())
//! # }
//! ```

pub use taleweaver_core::{
    Atmosphere, Genre, Mood, Period, Perspective, PromptPayload, RawGeneration, StoryFormat,
    StoryImage, StoryLength, StoryMeta, StoryParams, StoryParamsBuilder, StoryResponse,
    StorySource, init_tracing,
};
pub use taleweaver_error::{
    GeminiError, GeminiErrorKind, GenerationError, GenerationErrorKind, TaleweaverError,
    TaleweaverResult,
};
pub use taleweaver_interface::{GenerationResult, StoryDriver};

pub use taleweaver_cache::{StoryCache, StoryCacheConfig};
pub use taleweaver_rate_limit::{RateLimitConfig, RequestWindow};

pub use taleweaver_models::{GeminiClient, GeminiConfig};
pub use taleweaver_narrative::{StoryGenerator, normalize_story};
pub use taleweaver_prompt::{StoryPrompt, inspiration};
