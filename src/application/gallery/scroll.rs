// SPDX-License-Identifier: MPL-2.0
//! Scroll position handling.
//!
//! The renderer reports raw scroll geometry; this module turns it into the
//! "load more" decision and the scroll-to-top affordance.

use crate::domain::gallery::ScrollThreshold;

/// Scroll offset (px) past which the scroll-to-top button is offered.
pub const SCROLL_TO_TOP_OFFSET: f64 = 800.0;

/// Geometry of the scroll container at one scroll tick, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top.
    pub scroll_position: f64,
    /// Visible height of the container.
    pub viewport_height: f64,
    /// Offset of the bottom edge of the loaded content.
    pub content_bottom: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_position: f64, viewport_height: f64, content_bottom: f64) -> Self {
        Self {
            scroll_position,
            viewport_height,
            content_bottom,
        }
    }

    /// Content left below the visible area. Negative once overscrolled.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.content_bottom - (self.scroll_position + self.viewport_height)
    }

    #[must_use]
    pub fn is_near_bottom(&self, threshold: ScrollThreshold) -> bool {
        self.remaining() < threshold.value()
    }

    #[must_use]
    pub fn shows_scroll_to_top(&self) -> bool {
        self.scroll_position > SCROLL_TO_TOP_OFFSET
    }
}

/// Decides whether the next page should be requested.
///
/// Pure: safe to call on every scroll tick.
#[must_use]
pub fn should_load_more(
    metrics: ScrollMetrics,
    threshold: ScrollThreshold,
    in_flight: bool,
    exhausted: bool,
) -> bool {
    metrics.is_near_bottom(threshold) && !in_flight && !exhausted
}
