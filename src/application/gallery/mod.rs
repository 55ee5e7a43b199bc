// SPDX-License-Identifier: MPL-2.0
//! Incremental gallery loading.
//!
//! The loader fetches photos page by page, merges them into a de-duplicated
//! list, and warms images ahead of the grid and the lightbox. It tolerates
//! rapid scroll ticks and filter switches without duplicate requests and
//! without applying responses from an abandoned filter session.
//!
//! # Components
//!
//! - [`GalleryLoader`]: the state machine driven by scroll, filter and viewer events
//! - [`LoaderState`]: pagination state of one filter session
//! - [`PendingPage`] / [`PageResponse`]: one issued store call and its result
//! - [`ScrollMetrics`]: scroll geometry and the "load more" decision
//! - [`ViewerState`]: lightbox cursor with circular navigation
//! - [`GalleryView`]: snapshot for the grid renderer

mod loader;
mod request;
mod scroll;
mod settings;
mod state;
mod view;
mod viewer;

pub use loader::GalleryLoader;
pub use request::{
    AssetResponse, FetchOutcome, PageRequest, PageResponse, PendingAsset, PendingPage,
};
pub use scroll::{should_load_more, ScrollMetrics, SCROLL_TO_TOP_OFFSET};
pub use settings::LoaderSettings;
pub use state::{LoaderState, SessionToken};
pub use view::{GalleryView, LoadError, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE};
pub use viewer::{circular_successors, ViewerState};
