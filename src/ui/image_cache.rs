// SPDX-License-Identifier: MPL-2.0
//! Bounded cache of image handles keyed by image URL.
//!
//! A URL is fetched once; later views reuse the decoded handle until it is
//! evicted by newer entries.

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Load state of one image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, ImageState>,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Marks `url` as loading and returns `true` when a fetch should start.
    ///
    /// Returns `false` if the URL is already loading, loaded or failed; that
    /// entry becomes the most recently used one.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.get(url).is_some() {
            return false;
        }
        self.entries.put(url.to_string(), ImageState::Loading);
        true
    }

    pub fn finish(&mut self, url: &str, handle: Option<Handle>) {
        let state = match handle {
            Some(handle) => ImageState::Ready(handle),
            None => ImageState::Failed,
        };
        self.entries.put(url.to_string(), state);
    }

    /// Current state without touching recency; `None` if never requested or evicted.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageState> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_bytes(vec![0u8; 4])
    }

    #[test]
    fn begin_only_once_per_url() {
        let mut cache = ImageCache::new(4);
        assert!(cache.begin("/media/a.png"));
        assert!(!cache.begin("/media/a.png"));
        assert!(matches!(cache.get("/media/a.png"), Some(ImageState::Loading)));
    }

    #[test]
    fn finish_records_outcome() {
        let mut cache = ImageCache::new(4);
        cache.begin("/media/a.png");
        cache.begin("/media/b.png");
        cache.finish("/media/a.png", Some(handle()));
        cache.finish("/media/b.png", None);

        assert!(matches!(cache.get("/media/a.png"), Some(ImageState::Ready(_))));
        assert!(matches!(cache.get("/media/b.png"), Some(ImageState::Failed)));
        assert!(!cache.begin("/media/b.png"), "failed images are not retried");
    }

    #[test]
    fn least_recent_entry_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.begin("a");
        cache.begin("b");
        cache.begin("c");
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.begin("a"), "evicted url can be fetched again");
    }

    #[test]
    fn begin_on_cached_url_keeps_it_alive() {
        let mut cache = ImageCache::new(2);
        cache.begin("a");
        cache.begin("b");
        assert!(!cache.begin("a"));
        cache.begin("c");
        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut cache = ImageCache::new(0);
        cache.begin("a");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 1);
        assert!(!cache.is_empty());
    }
}
