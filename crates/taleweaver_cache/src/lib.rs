//! Exact-match response caching for the Taleweaver story generation library.

mod config;
mod story_cache;

pub use config::StoryCacheConfig;
pub use story_cache::StoryCache;
