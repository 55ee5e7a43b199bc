// SPDX-License-Identifier: MPL-2.0
//! Issued requests and their responses.
//!
//! The loader never awaits while holding its own state. Issuing work returns
//! a pending value that owns everything needed to run it; resolving that
//! value yields a response which is handed back to the loader.

use super::state::SessionToken;
use crate::application::port::{AssetSource, PageQuery, PhotoStore, StoreResult};
use crate::domain::media::MediaItem;
use crate::media::prefetch::load_asset_for_prefetch;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Page requests
// =============================================================================

/// Identity of an issued page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Session that was live when the request was issued.
    pub token: SessionToken,
    /// Store query sent for this request.
    pub query: PageQuery,
}

/// A page request that has been issued but not yet sent.
///
/// Dropping it without resolving leaves the loader in flight until the
/// session changes; callers are expected to resolve every pending page.
#[must_use = "a pending page does nothing until resolved"]
pub struct PendingPage {
    store: Arc<dyn PhotoStore>,
    request: PageRequest,
}

impl PendingPage {
    pub(crate) fn new(store: Arc<dyn PhotoStore>, request: PageRequest) -> Self {
        Self { store, request }
    }

    #[must_use]
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Performs the single store call for this request.
    pub async fn resolve(self) -> PageResponse {
        let result = self.store.fetch_page(self.request.query).await;
        PageResponse {
            request: self.request,
            result,
        }
    }
}

impl fmt::Debug for PendingPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingPage")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// Result of a page request, tagged with the request that produced it.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub request: PageRequest,
    pub result: StoreResult<Vec<MediaItem>>,
}

/// What the loader did with a [`PageResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Items were merged; the session can continue.
    Appended {
        /// Rows returned by the store.
        received: usize,
        /// Rows that were new to the session.
        appended: usize,
    },
    /// The store returned an empty page; the session has ended.
    Exhausted {
        /// Rows that were new to the session, always zero for an empty page.
        appended: usize,
    },
    /// The store failed; the same page will be requested again next time.
    Failed,
    /// The response belonged to a superseded session and was dropped.
    Stale,
}

// =============================================================================
// Asset requests
// =============================================================================

/// A cache-warming download that has not run yet.
#[must_use = "a pending asset does nothing until resolved"]
pub struct PendingAsset {
    source: Arc<dyn AssetSource>,
    token: SessionToken,
    url: String,
}

impl PendingAsset {
    pub(crate) fn new(source: Arc<dyn AssetSource>, token: SessionToken, url: String) -> Self {
        Self { source, token, url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Downloads the asset.
    pub async fn resolve(self) -> AssetResponse {
        let (url, result) = load_asset_for_prefetch(self.source, self.url).await;
        AssetResponse {
            token: self.token,
            url,
            result,
        }
    }
}

impl fmt::Debug for PendingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAsset")
            .field("token", &self.token)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

/// Downloaded bytes (or the failure) for one prefetched URL.
#[derive(Debug, Clone)]
pub struct AssetResponse {
    pub token: SessionToken,
    pub url: String,
    pub result: StoreResult<Vec<u8>>,
}

