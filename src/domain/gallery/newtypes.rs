// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for loader tunables,
//! ensuring they are always within valid ranges.

// =============================================================================
// Page Size
// =============================================================================

/// Page size bounds (1 to 100 rows).
pub mod page_size_bounds {
    /// Minimum rows per page.
    pub const MIN: u32 = 1;
    /// Maximum rows per page.
    pub const MAX: u32 = 100;
    /// Default rows per page.
    pub const DEFAULT: u32 = 20;
}

/// Number of rows requested from the photo store per page.
///
/// # Example
///
/// ```
/// use studio_gallery::domain::gallery::PageSize;
///
/// assert_eq!(PageSize::default().value(), 20);
/// assert_eq!(PageSize::new(0).value(), 1); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a new page size, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the value as usize, for comparisons with result lengths.
    #[must_use]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_size_bounds::DEFAULT)
    }
}

// =============================================================================
// Scroll Threshold
// =============================================================================

/// Scroll threshold bounds in pixels.
pub mod scroll_threshold_bounds {
    /// Minimum distance (load only when the bottom is reached).
    pub const MIN: f64 = 0.0;
    /// Maximum distance.
    pub const MAX: f64 = 5000.0;
    /// Default distance, roughly one viewport ahead.
    pub const DEFAULT: f64 = 600.0;
}

/// Remaining distance (px) below the viewport under which the next page loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(f64);

impl ScrollThreshold {
    /// Creates a new threshold, clamping to valid range. NaN maps to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(scroll_threshold_bounds::MIN, scroll_threshold_bounds::MAX))
    }

    /// Returns the value in pixels.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self(scroll_threshold_bounds::DEFAULT)
    }
}

// =============================================================================
// Prefetch Count
// =============================================================================

/// Prefetch count bounds.
pub mod prefetch_count_bounds {
    /// Minimum (prefetching off).
    pub const MIN: usize = 0;
    /// Maximum assets warmed per trigger.
    pub const MAX: usize = 20;
}

/// Number of assets to warm for one trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefetchCount(usize);

impl PrefetchCount {
    /// Creates a new count, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(prefetch_count_bounds::MIN, prefetch_count_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if prefetching is effectively disabled.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}
