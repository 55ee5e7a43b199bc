// SPDX-License-Identifier: MPL-2.0
//! Per-loader event log.
//!
//! Every recorded event is mirrored to `tracing` and kept in a bounded ring
//! buffer so a session can be exported after the fact.

use super::buffer::{BufferCapacity, EventRing};
use super::events::{GalleryEvent, GalleryEventKind};

/// Bounded log of gallery events.
#[derive(Debug, Clone)]
pub struct GalleryLog {
    events: EventRing<GalleryEvent>,
}

impl GalleryLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: EventRing::new(capacity),
        }
    }

    /// Records an event and emits it through `tracing`.
    pub fn record(&mut self, kind: GalleryEventKind) {
        trace_event(&kind);
        self.events.push(GalleryEvent::now(kind));
    }

    /// Events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryEvent> {
        self.events.iter()
    }

    /// Most recent event kind, if any.
    #[must_use]
    pub fn last_kind(&self) -> Option<&GalleryEventKind> {
        self.events.last().map(|event| &event.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes the retained events as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&GalleryEvent> = self.events.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for GalleryLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

fn trace_event(kind: &GalleryEventKind) {
    match kind {
        GalleryEventKind::SessionStarted { filter, token } => {
            tracing::info!(%filter, token, "gallery session started");
        }
        GalleryEventKind::PageRequested { token, page } => {
            tracing::debug!(token, page, "requesting page");
        }
        GalleryEventKind::PageApplied {
            token,
            page,
            received,
            appended,
            exhausted,
        } => {
            tracing::debug!(token, page, received, appended, exhausted, "page applied");
        }
        GalleryEventKind::PageFailed {
            token,
            page,
            message,
        } => {
            tracing::warn!(token, page, %message, "failed to load photos");
        }
        GalleryEventKind::StaleDiscarded {
            response_token,
            live_token,
            page,
        } => {
            tracing::debug!(response_token, live_token, page, "discarded stale page");
        }
        GalleryEventKind::PrefetchScheduled { count } => {
            tracing::trace!(count, "prefetch scheduled");
        }
        GalleryEventKind::ViewerMoved { index } => {
            tracing::trace!(index, "viewer moved");
        }
    }
}
