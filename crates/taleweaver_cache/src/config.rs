//! Story cache configuration.

use serde::{Deserialize, Serialize};

/// Default bound on the number of cached stories.
const DEFAULT_MAX_ENTRIES: usize = 128;

/// Configuration for the story cache.
///
/// # Examples
///
/// ```
/// use taleweaver_cache::StoryCacheConfig;
///
/// let config = StoryCacheConfig::default().with_max_entries(16);
/// assert_eq!(*config.max_entries(), 16);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct StoryCacheConfig {
    /// Maximum number of entries before least-recently-used eviction
    max_entries: usize,
}

impl Default for StoryCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}
