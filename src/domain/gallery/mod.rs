// SPDX-License-Identifier: MPL-2.0
//! Gallery loading domain types.
//!
//! Bounded value objects for the loader's tunables:
//! - [`PageSize`]: rows requested per page
//! - [`ScrollThreshold`]: distance from the bottom that triggers a load
//! - [`PrefetchCount`]: how many assets to warm ahead

pub mod newtypes;

pub use newtypes::{
    page_size_bounds, prefetch_count_bounds, scroll_threshold_bounds, PageSize, PrefetchCount,
    ScrollThreshold,
};
