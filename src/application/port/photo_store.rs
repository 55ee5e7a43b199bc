// SPDX-License-Identifier: MPL-2.0
//! Photo store port definition.
//!
//! This module defines the [`PhotoStore`] trait the gallery loader pages
//! through. Infrastructure adapters implement it over HTTP or in memory.
//!
//! # Contract
//!
//! - `category == None` means no filter; matching is case-insensitive.
//! - Pagination is offset based: page `p` holds rows
//!   `[p * page_size, p * page_size + page_size)` of the filtered result set,
//!   newest upload first.
//! - A page shorter than `page_size` (including an empty one) marks the end.

use crate::domain::gallery::PageSize;
use crate::domain::media::{Category, MediaItem};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// StoreError
// =============================================================================

/// Errors a photo store or asset source can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("HTTP status {status}")]
    Http {
        /// Status code returned by the store.
        status: u16,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A row violated the record invariants (no URL, unknown category...).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Anything else, e.g. injected failures in tests.
    #[error("{0}")]
    Other(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// PageQuery
// =============================================================================

/// One page request as sent to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Category filter, `None` for "show all".
    pub category: Option<Category>,
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page.
    pub page_size: PageSize,
}

impl PageQuery {
    /// Index of the first row of this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size.value())
    }

    /// Number of rows requested.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.page_size.value()
    }
}

// =============================================================================
// PhotoStore Trait
// =============================================================================

/// Port for paginated photo queries.
///
/// Methods return boxed futures so the caller decides which executor runs
/// them; the loader itself never awaits while holding its state.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so requests can be spawned.
pub trait PhotoStore: Send + Sync {
    /// Fetches one page of photos, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store is unreachable or answers with
    /// something that cannot be turned into media items.
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'_, StoreResult<Vec<MediaItem>>>;
}
