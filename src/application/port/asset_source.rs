// SPDX-License-Identifier: MPL-2.0
//! Asset source port definition.
//!
//! Prefetching warms image URLs ahead of display. The [`AssetSource`] trait
//! is what actually downloads the bytes; the loader only decides which URLs
//! are worth fetching and caches what comes back.

use super::photo_store::StoreResult;
use futures_util::future::BoxFuture;

/// Port for downloading image bytes by URL.
pub trait AssetSource: Send + Sync {
    /// Downloads the asset at `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](super::StoreError) on any transport or status
    /// failure. Callers treat these as cache misses.
    fn fetch_asset(&self, url: String) -> BoxFuture<'_, StoreResult<Vec<u8>>>;
}
