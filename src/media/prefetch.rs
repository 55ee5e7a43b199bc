// SPDX-License-Identifier: MPL-2.0
//! Asset prefetch cache for faster gallery and lightbox display.
//!
//! This module keeps downloaded image bytes for URLs the loader expects to
//! show soon: the first thumbnails of each new page and the next few
//! full-size images ahead of the lightbox.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used assets are evicted first
//! - **Memory-bounded**: Total cache size limited by configurable byte limit
//! - **URL-keyed**: Assets indexed by the URL they were downloaded from
//! - **Loader-owned**: One cache per loader, cleared when the filter session changes
//!
//! # Usage
//!
//! ```ignore
//! let mut cache = AssetPrefetchCache::new(config);
//!
//! if let Some(bytes) = cache.get(url) {
//!     // Display from memory
//! }
//!
//! // Only download what is not cached yet
//! let missing = cache.urls_to_prefetch(&urls);
//! ```

use crate::application::port::{AssetSource, StoreResult};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default prefetch cache size in bytes (32 MB).
/// Holds ~80 thumbnails plus a handful of full-size JPEGs.
pub const DEFAULT_PREFETCH_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Minimum prefetch cache size in bytes (1 MB).
pub const MIN_PREFETCH_CACHE_BYTES: usize = 1024 * 1024;

/// Maximum prefetch cache size in bytes (256 MB).
pub const MAX_PREFETCH_CACHE_BYTES: usize = 256 * 1024 * 1024;

/// Default maximum number of assets to cache.
pub const DEFAULT_MAX_ENTRIES: usize = 128;

/// Minimum assets to cache.
pub const MIN_MAX_ENTRIES: usize = 8;

/// Maximum assets to cache.
pub const MAX_MAX_ENTRIES: usize = 512;

/// Configuration for the prefetch cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,

    /// Maximum number of assets to cache.
    pub max_entries: usize,

    /// Whether prefetching is enabled.
    pub enabled: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PREFETCH_CACHE_BYTES,
            max_entries: DEFAULT_MAX_ENTRIES,
            enabled: true,
        }
    }
}

impl PrefetchConfig {
    /// Creates a new prefetch configuration with specified limits.
    #[must_use]
    pub fn new(max_bytes: usize, max_entries: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_PREFETCH_CACHE_BYTES, MAX_PREFETCH_CACHE_BYTES),
            max_entries: max_entries.clamp(MIN_MAX_ENTRIES, MAX_MAX_ENTRIES),
            enabled: true,
        }
    }

    /// Creates a disabled prefetch configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Statistics about prefetch cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefetchStats {
    /// Number of assets currently in cache.
    pub entry_count: usize,

    /// Total bytes currently used by cached assets.
    pub total_bytes: usize,

    /// Number of cache hits.
    pub hits: u64,

    /// Number of cache misses.
    pub misses: u64,

    /// Number of assets evicted due to limits.
    pub evictions: u64,

    /// Number of assets inserted.
    pub insertions: u64,
}

impl PrefetchStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache for prefetched image bytes.
pub struct AssetPrefetchCache {
    cache: LruCache<String, Arc<Vec<u8>>>,
    config: PrefetchConfig,
    current_bytes: usize,
    stats: PrefetchStats,
}

impl AssetPrefetchCache {
    /// Creates a new prefetch cache with the given configuration.
    #[must_use]
    pub fn new(config: PrefetchConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries)
            .or(NonZeroUsize::new(DEFAULT_MAX_ENTRIES))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: PrefetchStats::default(),
        }
    }

    /// Inserts downloaded bytes for `url`.
    ///
    /// Returns `true` if the asset was inserted, `false` if caching is disabled
    /// or the asset is too large.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) -> bool {
        if !self.config.enabled {
            return false;
        }

        let size = bytes.len();

        // Don't cache assets larger than half the cache size
        if size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.len());
        }

        while self.current_bytes + size > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.len());
                self.stats.evictions += 1;
            }
        }

        // The entry-count bound evicts inside `push`
        if let Some((evicted_url, evicted)) = self.cache.push(url.clone(), Arc::new(bytes)) {
            if evicted_url != url {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.len());
                self.stats.evictions += 1;
            }
        }

        self.current_bytes += size;
        self.stats.insertions += 1;
        self.stats.entry_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;

        true
    }

    /// Gets cached bytes for `url`, updating LRU order.
    pub fn get(&mut self, url: &str) -> Option<Arc<Vec<u8>>> {
        if !self.config.enabled {
            return None;
        }

        if let Some(bytes) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(Arc::clone(bytes))
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks if `url` is cached without updating LRU order.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.config.enabled && self.cache.contains(url)
    }

    /// Returns the URLs that still need downloading, deduplicated, in input order.
    #[must_use]
    pub fn urls_to_prefetch<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        if !self.config.enabled {
            return Vec::new();
        }

        let mut missing: Vec<String> = Vec::new();
        for url in urls {
            if !self.contains(url) && !missing.iter().any(|m| m == url) {
                missing.push(url.to_string());
            }
        }
        missing
    }

    /// Clears all cached assets.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
        self.stats.entry_count = 0;
        self.stats.total_bytes = 0;
    }

    #[must_use]
    pub fn stats(&self) -> PrefetchStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn config(&self) -> &PrefetchConfig {
        &self.config
    }
}

impl std::fmt::Debug for AssetPrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetPrefetchCache")
            .field("enabled", &self.config.enabled)
            .field("entry_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_entries", &self.config.max_entries)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Downloads one asset for prefetching.
///
/// Returns the URL alongside the result so the caller can match it up.
pub async fn load_asset_for_prefetch(
    source: Arc<dyn AssetSource>,
    url: String,
) -> (String, StoreResult<Vec<u8>>) {
    let result = source.fetch_asset(url.clone()).await;
    (url, result)
}
