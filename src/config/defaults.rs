// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Store**: Hosted photo store connection
//! - **Gallery**: Paging and scroll trigger
//! - **Prefetch**: Asset cache warming
//! - **Diagnostics**: Event log capacity

use crate::diagnostics::buffer_capacity_bounds;
use crate::domain::gallery::{page_size_bounds, prefetch_count_bounds, scroll_threshold_bounds};
use crate::media::prefetch as prefetch_cache;

// ==========================================================================
// Store Defaults
// ==========================================================================

/// Default request timeout for the hosted store (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = page_size_bounds::DEFAULT;

/// Default distance from the bottom (px) that triggers the next page.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = scroll_threshold_bounds::DEFAULT;

/// Default number of thumbnails warmed after each page.
pub const DEFAULT_THUMBNAIL_PREFETCH: usize = 5;

/// Default number of full-size images warmed ahead of the lightbox.
pub const DEFAULT_VIEWER_PREFETCH: usize = 3;

// ==========================================================================
// Prefetch Cache Defaults
// ==========================================================================

/// Default prefetch cache size in bytes.
pub const DEFAULT_PREFETCH_MAX_BYTES: usize = prefetch_cache::DEFAULT_PREFETCH_CACHE_BYTES;

/// Default maximum number of cached assets.
pub const DEFAULT_PREFETCH_MAX_ENTRIES: usize = prefetch_cache::DEFAULT_MAX_ENTRIES;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept per loader.
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Store validation
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    // Gallery validation
    assert!(DEFAULT_PAGE_SIZE >= page_size_bounds::MIN);
    assert!(DEFAULT_PAGE_SIZE <= page_size_bounds::MAX);
    assert!(DEFAULT_SCROLL_THRESHOLD_PX >= scroll_threshold_bounds::MIN);
    assert!(DEFAULT_SCROLL_THRESHOLD_PX <= scroll_threshold_bounds::MAX);
    assert!(DEFAULT_THUMBNAIL_PREFETCH <= prefetch_count_bounds::MAX);
    assert!(DEFAULT_VIEWER_PREFETCH <= prefetch_count_bounds::MAX);

    // Prefetch validation
    assert!(DEFAULT_PREFETCH_MAX_BYTES >= prefetch_cache::MIN_PREFETCH_CACHE_BYTES);
    assert!(DEFAULT_PREFETCH_MAX_BYTES <= prefetch_cache::MAX_PREFETCH_CACHE_BYTES);
    assert!(DEFAULT_PREFETCH_MAX_ENTRIES >= prefetch_cache::MIN_MAX_ENTRIES);
    assert!(DEFAULT_PREFETCH_MAX_ENTRIES <= prefetch_cache::MAX_MAX_ENTRIES);

    // Diagnostics validation
    assert!(DEFAULT_EVENT_BUFFER_CAPACITY >= buffer_capacity_bounds::MIN);
    assert!(DEFAULT_EVENT_BUFFER_CAPACITY <= buffer_capacity_bounds::MAX);
};
