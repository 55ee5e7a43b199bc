// SPDX-License-Identifier: MPL-2.0
//! Loader tunables.

use crate::config::defaults::{DEFAULT_THUMBNAIL_PREFETCH, DEFAULT_VIEWER_PREFETCH};
use crate::diagnostics::BufferCapacity;
use crate::domain::gallery::{PageSize, PrefetchCount, ScrollThreshold};
use crate::media::prefetch::PrefetchConfig;

/// Everything a [`GalleryLoader`](super::GalleryLoader) can be tuned with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderSettings {
    pub page_size: PageSize,
    pub scroll_threshold: ScrollThreshold,
    pub thumbnail_prefetch: PrefetchCount,
    pub viewer_prefetch: PrefetchCount,
    pub prefetch: PrefetchConfig,
    pub log_capacity: BufferCapacity,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            scroll_threshold: ScrollThreshold::default(),
            thumbnail_prefetch: PrefetchCount::new(DEFAULT_THUMBNAIL_PREFETCH),
            viewer_prefetch: PrefetchCount::new(DEFAULT_VIEWER_PREFETCH),
            prefetch: PrefetchConfig::default(),
            log_capacity: BufferCapacity::default(),
        }
    }
}

impl LoaderSettings {
    #[must_use]
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Turns off all cache warming.
    #[must_use]
    pub fn without_prefetch(mut self) -> Self {
        self.prefetch = PrefetchConfig::disabled();
        self
    }
}
