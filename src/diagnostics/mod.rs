// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording gallery loader activity.
//!
//! # Architecture
//!
//! - [`BufferCapacity`]: Clamped size of the event ring
//! - [`GalleryEvent`]: Timestamped record of one loader transition
//! - [`GalleryLog`]: Per-loader log that mirrors events to `tracing`
//!
//! Stale responses are recorded as [`GalleryEventKind::StaleDiscarded`] at
//! debug level and never as failures.

mod buffer;
mod events;
mod log;

pub use buffer::{buffer_capacity_bounds, BufferCapacity};
pub use events::{GalleryEvent, GalleryEventKind};
pub use log::GalleryLog;
