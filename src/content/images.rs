// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of fetched wallpaper images.
//!
//! Handles are cached per URL so every image is fetched at most once while
//! it stays in the cache. The cache is bounded: browsing a large catalog
//! cannot grow memory without limit.

use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// How many decoded images to keep around. Preview plus a strip of
/// thumbnails fit comfortably; older entries are evicted LRU-first.
const CACHE_CAPACITY: usize = 64;

#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, image::Handle>,
    /// URLs with a fetch in flight, so a slow network never triggers
    /// duplicate requests for the same image.
    pending: HashSet<String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(CACHE_CAPACITY).expect("nonzero capacity")),
            pending: HashSet::new(),
        }
    }

    /// Looks up a handle without touching the recency order, so views can
    /// read the cache through a shared reference.
    pub fn get(&self, url: &str) -> Option<&image::Handle> {
        self.entries.peek(url)
    }

    /// Marks the URL as having a fetch in flight. Returns `false` when the
    /// image is already cached or already being fetched.
    pub fn start_fetch(&mut self, url: &str) -> bool {
        if self.entries.contains(url) || self.pending.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Stores a fetched handle and clears the pending mark.
    pub fn insert(&mut self, url: String, handle: image::Handle) {
        self.pending.remove(&url);
        self.entries.put(url, handle);
    }

    /// Clears the pending mark after a failed fetch so it can be retried.
    pub fn fetch_failed(&mut self, url: &str) {
        self.pending.remove(url);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}
