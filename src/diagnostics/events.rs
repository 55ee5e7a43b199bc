// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for gallery activity.
//!
//! Stale responses get their own kind so they are never confused with
//! failures when reading a log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened inside the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GalleryEventKind {
    /// A new filter session began.
    SessionStarted { filter: String, token: u64 },

    /// A page request was issued to the store.
    PageRequested { token: u64, page: u32 },

    /// A page response was merged.
    PageApplied {
        token: u64,
        page: u32,
        received: usize,
        appended: usize,
        exhausted: bool,
    },

    /// The store failed; the page can be retried.
    PageFailed {
        token: u64,
        page: u32,
        message: String,
    },

    /// A response from a superseded session arrived and was dropped.
    StaleDiscarded {
        response_token: u64,
        live_token: u64,
        page: u32,
    },

    /// Assets were queued for cache warming.
    PrefetchScheduled { count: usize },

    /// The lightbox moved to a new index.
    ViewerMoved { index: usize },
}

/// A timestamped gallery event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: GalleryEventKind,
}

impl GalleryEvent {
    #[must_use]
    pub fn now(kind: GalleryEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}
