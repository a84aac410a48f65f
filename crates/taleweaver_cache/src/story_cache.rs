//! In-memory story cache keyed by canonical parameter serialization.

use crate::StoryCacheConfig;
use serde_json::json;
use std::collections::{HashMap, VecDeque};
use taleweaver_core::StoryParams;

/// Exact-match cache from canonical request keys to normalized stories.
///
/// Keys are a canonical sorted-key JSON serialization of every request
/// field, so byte-identical parameter records always collide and anything
/// else never does. Absent optional fields serialize as `null`, which keeps
/// them distinct from explicitly empty strings. Entries never expire by
/// time; a least-recently-used bound caps memory.
///
/// # Examples
///
/// ```
/// use taleweaver_cache::StoryCache;
/// use taleweaver_core::StoryParams;
///
/// let params = StoryParams::builder()
///     .plot("A diary writes itself")
///     .build()
///     .unwrap();
///
/// let mut cache = StoryCache::default();
/// let key = StoryCache::make_key(&params);
/// assert!(cache.get(&key).is_none());
///
/// cache.insert(key.clone(), "A story.");
/// assert_eq!(cache.get(&key), Some("A story."));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StoryCache {
    config: StoryCacheConfig,
    entries: HashMap<String, String>,
    /// Keys ordered least- to most-recently used
    recency: VecDeque<String>,
}

impl StoryCache {
    /// Creates a new cache with the given configuration.
    pub fn new(config: StoryCacheConfig) -> Self {
        Self {
            config,
            entries: HashMap::new(),
            recency: VecDeque::new(),
        }
    }

    /// Canonical cache key for a parameter record.
    ///
    /// Every field participates, optional fields included; serialization is
    /// sorted by field name, so the key is stable regardless of construction
    /// order. Free text is keyed verbatim — no whitespace or case folding.
    pub fn make_key(params: &StoryParams) -> String {
        json!({
            "genre": params.genre(),
            "plot": params.plot(),
            "perspective": params.perspective(),
            "characters": params.characters(),
            "setting": params.setting(),
            "format": params.format(),
            "length": params.length(),
            "mood": params.mood(),
            "period": params.period(),
            "atmosphere": params.atmosphere(),
            "image": params.image(),
        })
        .to_string()
    }

    /// Looks up a cached story, refreshing its recency on a hit.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        if self.entries.contains_key(key) {
            self.touch(key);
            tracing::debug!(entries = self.entries.len(), "Cache hit");
            self.entries.get(key).map(String::as_str)
        } else {
            tracing::debug!(entries = self.entries.len(), "Cache miss");
            None
        }
    }

    /// Stores a story under the given key, overwriting any existing entry.
    ///
    /// At capacity, the least recently used entry is evicted first.
    pub fn insert(&mut self, key: impl Into<String>, story: impl Into<String>) {
        let key = key.into();

        if self.entries.contains_key(&key) {
            self.touch(&key);
        } else {
            if self.entries.len() >= *self.config.max_entries() {
                self.evict_oldest();
            }
            self.recency.push_back(key.clone());
        }

        self.entries.insert(key, story.into());
        tracing::debug!(entries = self.entries.len(), "Cached story");
    }

    /// Number of cached stories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no stories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all cached stories.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    /// Moves a key to the most-recently-used position.
    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            if let Some(entry) = self.recency.remove(pos) {
                self.recency.push_back(entry);
            }
        }
    }

    /// Drops the least recently used entry.
    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.recency.pop_front() {
            self.entries.remove(&oldest);
            tracing::debug!("Evicted least recently used story");
        }
    }
}
