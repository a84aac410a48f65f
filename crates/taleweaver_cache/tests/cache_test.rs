//! Tests for the StoryCache implementation.

use taleweaver_cache::{StoryCache, StoryCacheConfig};
use taleweaver_core::{StoryLength, StoryParams};

fn sample_params(plot: &str) -> StoryParams {
    StoryParams::builder()
        .plot(plot)
        .characters("Mara")
        .setting("an abandoned lighthouse")
        .build()
        .expect("valid params")
}

#[test]
fn test_insert_and_get() {
    let mut cache = StoryCache::default();
    let key = StoryCache::make_key(&sample_params("A diary writes itself"));

    assert!(cache.get(&key).is_none());

    cache.insert(key.clone(), "A story.");
    assert_eq!(cache.get(&key), Some("A story."));

    let other = StoryCache::make_key(&sample_params("A mirror shows tomorrow"));
    assert!(cache.get(&other).is_none());
}

#[test]
fn test_identical_params_share_a_key() {
    let a = StoryCache::make_key(&sample_params("A diary writes itself"));
    let b = StoryCache::make_key(&sample_params("A diary writes itself"));
    assert_eq!(a, b);
}

#[test]
fn test_absent_option_differs_from_explicit_default() {
    let unset = sample_params("A diary writes itself");
    let explicit = StoryParams::builder()
        .plot("A diary writes itself")
        .characters("Mara")
        .setting("an abandoned lighthouse")
        .length(Some(StoryLength::default()))
        .build()
        .expect("valid params");

    assert_ne!(
        StoryCache::make_key(&unset),
        StoryCache::make_key(&explicit)
    );
}

#[test]
fn test_whitespace_is_keyed_verbatim() {
    let trimmed = sample_params("A diary writes itself");
    let trailing = sample_params("A diary writes itself ");

    assert_ne!(
        StoryCache::make_key(&trimmed),
        StoryCache::make_key(&trailing)
    );
}

#[test]
fn test_insert_overwrites_existing_key() {
    let mut cache = StoryCache::default();
    let key = StoryCache::make_key(&sample_params("A diary writes itself"));

    cache.insert(key.clone(), "First draft.");
    cache.insert(key.clone(), "Second draft.");

    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&key), Some("Second draft."));
}

#[test]
fn test_clear() {
    let mut cache = StoryCache::default();

    cache.insert("key1", "one");
    cache.insert("key2", "two");
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get("key1").is_none());
}

#[test]
fn test_lru_eviction() {
    let config = StoryCacheConfig::default().with_max_entries(2);
    let mut cache = StoryCache::new(config);

    cache.insert("key1", "one");
    cache.insert("key2", "two");
    assert_eq!(cache.len(), 2);

    // Touch key1 so key2 becomes the eviction candidate.
    assert_eq!(cache.get("key1"), Some("one"));

    cache.insert("key3", "three");

    assert_eq!(cache.len(), 2);
    assert!(cache.get("key2").is_none());
    assert_eq!(cache.get("key1"), Some("one"));
    assert_eq!(cache.get("key3"), Some("three"));
}
