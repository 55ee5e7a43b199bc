// SPDX-License-Identifier: MPL-2.0
//! Incremental gallery loader.
//!
//! [`GalleryLoader`] pages through a [`PhotoStore`], merges pages into a
//! de-duplicated list and warms image URLs the user is likely to look at
//! next.
//!
//! # Request flow
//!
//! ```text
//! on_scroll / fetch_next_page ──► PendingPage ──resolve().await──► PageResponse
//!                                                                    │
//!                          FetchOutcome ◄── handle_page ◄────────────┘
//! ```
//!
//! Only one page request per session is in flight at a time. A filter change
//! starts a new session with a new [`SessionToken`]; responses carrying an
//! older token are dropped on arrival.

use super::request::{
    AssetResponse, FetchOutcome, PageRequest, PageResponse, PendingAsset, PendingPage,
};
use super::scroll::{should_load_more, ScrollMetrics};
use super::settings::LoaderSettings;
use super::state::{LoaderState, SessionToken};
use super::view::{GalleryView, LoadError};
use super::viewer::{circular_successors, ViewerState};
use crate::application::port::{AssetSource, PageQuery, PhotoStore};
use crate::diagnostics::{GalleryEventKind, GalleryLog};
use crate::domain::media::{CategoryFilter, MediaItem};
use crate::media::prefetch::{AssetPrefetchCache, PrefetchStats};
use std::collections::HashSet;
use std::sync::Arc;

/// Owns the state of the gallery grid and its lightbox.
pub struct GalleryLoader {
    store: Arc<dyn PhotoStore>,
    assets: Arc<dyn AssetSource>,
    settings: LoaderSettings,
    state: LoaderState,
    error: Option<LoadError>,
    viewer: ViewerState,
    scroll: ScrollMetrics,
    cache: AssetPrefetchCache,
    /// URLs queued or downloading for the current session.
    outstanding: HashSet<String>,
    prefetch_queue: Vec<PendingAsset>,
    log: GalleryLog,
}

impl GalleryLoader {
    /// Creates a loader showing every category.
    ///
    /// Nothing is fetched until the first trigger.
    #[must_use]
    pub fn new(
        store: Arc<dyn PhotoStore>,
        assets: Arc<dyn AssetSource>,
        settings: LoaderSettings,
    ) -> Self {
        let state = LoaderState::new(CategoryFilter::All, SessionToken::default());
        let mut log = GalleryLog::new(settings.log_capacity);
        log.record(GalleryEventKind::SessionStarted {
            filter: state.filter().to_string(),
            token: state.token().value(),
        });

        Self {
            store,
            assets,
            settings,
            state,
            error: None,
            viewer: ViewerState::default(),
            scroll: ScrollMetrics::default(),
            cache: AssetPrefetchCache::new(settings.prefetch),
            outstanding: HashSet::new(),
            prefetch_queue: Vec::new(),
            log,
        }
    }

    // =========================================================================
    // Filter sessions
    // =========================================================================

    /// Starts a new filter session.
    ///
    /// Clears loaded items, the inline error, the lightbox and the asset
    /// cache. Any response still in flight for the previous session is
    /// discarded when it arrives. Nothing is fetched here.
    pub fn set_category(&mut self, filter: impl Into<CategoryFilter>) {
        let filter = filter.into();
        self.state = self.state.successor(filter);
        self.error = None;
        self.viewer.close();
        self.cache.clear();
        self.outstanding.clear();
        self.prefetch_queue.clear();

        self.log.record(GalleryEventKind::SessionStarted {
            filter: filter.to_string(),
            token: self.state.token().value(),
        });
    }

    // =========================================================================
    // Paging
    // =========================================================================

    /// Issues a request for the next page.
    ///
    /// Returns `None` while a request is in flight or once the session is
    /// exhausted. That is the concurrency guard, not an error.
    pub fn fetch_next_page(&mut self) -> Option<PendingPage> {
        if !self.state.can_fetch() {
            return None;
        }

        self.state.set_in_flight(true);
        self.error = None;

        let request = PageRequest {
            token: self.state.token(),
            query: PageQuery {
                category: self.state.filter().category(),
                page: self.state.page(),
                page_size: self.settings.page_size,
            },
        };
        self.log.record(GalleryEventKind::PageRequested {
            token: request.token.value(),
            page: request.query.page,
        });

        Some(PendingPage::new(Arc::clone(&self.store), request))
    }

    /// Applies a resolved page.
    ///
    /// Responses from a superseded session leave every piece of state
    /// untouched. Failures keep `page` so the same page is retried by the
    /// next trigger.
    pub fn handle_page(&mut self, response: PageResponse) -> FetchOutcome {
        let PageResponse { request, result } = response;
        let live = self.state.token();

        if request.token != live {
            self.log.record(GalleryEventKind::StaleDiscarded {
                response_token: request.token.value(),
                live_token: live.value(),
                page: request.query.page,
            });
            return FetchOutcome::Stale;
        }

        self.state.set_in_flight(false);

        let rows = match result {
            Ok(rows) => rows,
            Err(cause) => {
                self.log.record(GalleryEventKind::PageFailed {
                    token: live.value(),
                    page: request.query.page,
                    message: cause.to_string(),
                });
                self.error = Some(LoadError::new(cause));
                return FetchOutcome::Failed;
            }
        };

        let received = rows.len();
        let appended = self.state.merge(rows);
        if received > 0 {
            self.state.advance_page();
        }
        let exhausted = received == 0;
        if exhausted {
            self.state.mark_exhausted();
        }

        self.log.record(GalleryEventKind::PageApplied {
            token: live.value(),
            page: request.query.page,
            received,
            appended: appended.len(),
            exhausted,
        });

        let thumbnails: Vec<String> = self.state.items()[appended.clone()]
            .iter()
            .take(self.settings.thumbnail_prefetch.value())
            .map(|item| item.thumbnail_url().to_string())
            .collect();
        self.schedule_prefetch(thumbnails);

        if exhausted {
            FetchOutcome::Exhausted {
                appended: appended.len(),
            }
        } else {
            FetchOutcome::Appended {
                received,
                appended: appended.len(),
            }
        }
    }

    /// Issues, awaits and applies the next page in one call.
    ///
    /// Returns `None` if the guard refused to issue a request. Callers that
    /// need overlapping triggers should use [`Self::fetch_next_page`] and
    /// [`Self::handle_page`] instead.
    pub async fn load_next_page(&mut self) -> Option<FetchOutcome> {
        let pending = self.fetch_next_page()?;
        let response = pending.resolve().await;
        Some(self.handle_page(response))
    }

    /// Returns `true` if the next page should be requested for `metrics`.
    ///
    /// Pure; the renderer may call it on every scroll tick.
    #[must_use]
    pub fn trigger_load_if_near_bottom(&self, metrics: ScrollMetrics) -> bool {
        should_load_more(
            metrics,
            self.settings.scroll_threshold,
            self.state.is_in_flight(),
            self.state.is_exhausted(),
        )
    }

    /// Records the scroll position and issues a request if near the bottom.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<PendingPage> {
        self.scroll = metrics;
        if self.trigger_load_if_near_bottom(metrics) {
            self.fetch_next_page()
        } else {
            None
        }
    }

    // =========================================================================
    // Prefetch
    // =========================================================================

    /// Warms full-size images for the items after `new_index`, wrapping
    /// around. Returns how many downloads were queued.
    pub fn on_viewer_index_change(&mut self, new_index: usize) -> usize {
        let items = self.state.items();
        if new_index >= items.len() {
            return 0;
        }

        let urls: Vec<String> = circular_successors(
            new_index,
            items.len(),
            self.settings.viewer_prefetch.value(),
        )
        .into_iter()
        .map(|index| items[index].full_url().to_string())
        .collect();

        self.log
            .record(GalleryEventKind::ViewerMoved { index: new_index });
        self.schedule_prefetch(urls)
    }

    /// Takes the queued cache-warming downloads.
    ///
    /// Each one should be resolved and handed back through
    /// [`Self::store_prefetched`].
    pub fn take_prefetch(&mut self) -> Vec<PendingAsset> {
        std::mem::take(&mut self.prefetch_queue)
    }

    /// Caches a finished download.
    ///
    /// Returns `true` if the bytes were cached. Failures and downloads from
    /// an earlier session are dropped without surfacing anything.
    pub fn store_prefetched(&mut self, response: AssetResponse) -> bool {
        let AssetResponse { token, url, result } = response;
        if token != self.state.token() {
            tracing::debug!(%url, "dropped prefetch from previous session");
            return false;
        }

        self.outstanding.remove(&url);
        match result {
            Ok(bytes) => self.cache.insert(url, bytes),
            Err(error) => {
                tracing::debug!(%url, %error, "prefetch failed");
                false
            }
        }
    }

    /// Cached bytes for `url`, if a prefetch already delivered them.
    pub fn prefetched(&mut self, url: &str) -> Option<Arc<Vec<u8>>> {
        self.cache.get(url)
    }

    #[must_use]
    pub fn prefetch_stats(&self) -> PrefetchStats {
        self.cache.stats()
    }

    fn schedule_prefetch(&mut self, urls: Vec<String>) -> usize {
        let missing = self.cache.urls_to_prefetch(urls.iter().map(String::as_str));
        let token = self.state.token();

        let mut count = 0;
        for url in missing {
            if self.outstanding.insert(url.clone()) {
                self.prefetch_queue
                    .push(PendingAsset::new(Arc::clone(&self.assets), token, url));
                count += 1;
            }
        }

        if count > 0 {
            self.log
                .record(GalleryEventKind::PrefetchScheduled { count });
        }
        count
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    /// Opens the lightbox on `index`. Returns the index shown.
    pub fn open_viewer(&mut self, index: usize) -> Option<usize> {
        let shown = self.viewer.open(index, self.state.items().len())?;
        self.on_viewer_index_change(shown);
        Some(shown)
    }

    /// Advances the lightbox, wrapping after the last item.
    pub fn viewer_next(&mut self) -> Option<usize> {
        let shown = self.viewer.next(self.state.items().len())?;
        self.on_viewer_index_change(shown);
        Some(shown)
    }

    /// Steps the lightbox back, wrapping before the first item.
    pub fn viewer_previous(&mut self) -> Option<usize> {
        let shown = self.viewer.previous(self.state.items().len())?;
        self.on_viewer_index_change(shown);
        Some(shown)
    }

    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    #[must_use]
    pub fn viewer_index(&self) -> Option<usize> {
        self.viewer.index()
    }

    /// Full-class URLs of the loaded items, in grid order.
    #[must_use]
    pub fn slides(&self) -> Vec<&str> {
        self.state.items().iter().map(MediaItem::full_url).collect()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Snapshot for the grid renderer.
    #[must_use]
    pub fn view(&self) -> GalleryView<'_> {
        let items = self.state.items();
        let in_flight = self.state.is_in_flight();
        GalleryView {
            items,
            filter: self.state.filter(),
            is_loading_initial: in_flight && items.is_empty(),
            is_loading_more: in_flight && !items.is_empty(),
            is_empty: self.state.is_exhausted() && items.is_empty() && self.error.is_none(),
            error: self.error.as_ref(),
            show_scroll_to_top: self.scroll.shows_scroll_to_top(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &LoaderState {
        &self.state
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        self.state.items()
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.state.filter()
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    #[must_use]
    pub fn log(&self) -> &GalleryLog {
        &self.log
    }
}

impl std::fmt::Debug for GalleryLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryLoader")
            .field("state", &self.state)
            .field("error", &self.error)
            .field("viewer", &self.viewer)
            .field("cache", &self.cache)
            .field("queued_prefetch", &self.prefetch_queue.len())
            .finish_non_exhaustive()
    }
}
