//! Decoded image cache.
//!
//! Keeps RGB8 pixel data keyed by image reference under an LRU policy, so a
//! card seen again after wraparound or a preloaded next card shows instantly.
//! Also tracks references whose load is in flight so each is loaded once.

use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Cached RGB8 pixel data.
#[derive(Clone)]
pub struct CachedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl CachedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<String, CachedImage>,
    in_flight: HashSet<String>,
}

impl ImageCache {
    /// Creates a new image cache; a zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            in_flight: HashSet::new(),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, reference: &str) -> Option<CachedImage> {
        let result = self.cache.get(reference).cloned();
        if result.is_some() {
            log::info!("Cache HIT: {}", reference);
        } else {
            log::info!("Cache MISS: {}", reference);
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, reference: String, cached_image: CachedImage) {
        log::info!(
            "Cache PUT: {} ({}x{})",
            reference,
            cached_image.width,
            cached_image.height
        );
        self.cache.put(reference, cached_image);
    }

    /// Checks if an image is in the cache without touching its recency.
    pub fn contains(&self, reference: &str) -> bool {
        self.cache.contains(reference)
    }

    /// Claims the load of `reference`. Returns false if it is already cached
    /// or another load is running; the caller must not start one then.
    pub fn begin_load(&mut self, reference: &str) -> bool {
        if self.contains(reference) || self.in_flight.contains(reference) {
            return false;
        }
        self.in_flight.insert(reference.to_string());
        true
    }

    /// Ends a load claimed by [`begin_load`](Self::begin_load), caching the
    /// image if it succeeded.
    pub fn finish_load(&mut self, reference: &str, image: Option<CachedImage>) {
        self.in_flight.remove(reference);
        if let Some(image) = image {
            self.put(reference.to_string(), image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> CachedImage {
        CachedImage::new(vec![0, 0, 0], 1, 1)
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put("a".into(), pixel());
        cache.put("b".into(), pixel());
        assert!(cache.get("a").is_some());
        cache.put("c".into(), pixel());

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn a_reference_is_loaded_once_at_a_time() {
        let mut cache = ImageCache::new(4);
        assert!(cache.begin_load("a"));
        assert!(!cache.begin_load("a"));
        assert!(cache.begin_load("b"));

        cache.finish_load("a", Some(pixel()));
        assert!(cache.contains("a"));
        assert!(!cache.begin_load("a"));
    }

    #[test]
    fn failed_load_can_be_retried() {
        let mut cache = ImageCache::new(4);
        assert!(cache.begin_load("a"));
        cache.finish_load("a", None);
        assert!(!cache.contains("a"));
        assert!(cache.begin_load("a"));
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut cache = ImageCache::new(0);
        cache.put("a".into(), pixel());
        assert!(cache.contains("a"));
    }
}
