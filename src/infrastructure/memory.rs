// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters.
//!
//! Deterministic stand-ins for the hosted store, used by tests, benchmarks
//! and the CLI's offline mode. They follow the store contract exactly:
//! newest upload first, case-insensitive category match, offset pagination.

use crate::application::port::{
    AssetSource, PageQuery, PhotoStore, StoreError, StoreResult,
};
use crate::domain::media::{
    Category, CategoryFilter, MediaItem, ResolutionSet, ResolutionVariant,
};
use chrono::{DateTime, Duration, Utc};
use futures_util::future::BoxFuture;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Mutex;

/// [`PhotoStore`] over a fixed list of items.
#[derive(Debug, Default)]
pub struct InMemoryPhotoStore {
    items: Vec<MediaItem>,
    calls: AtomicUsize,
    failures_left: AtomicU32,
    queries: Mutex<Vec<PageQuery>>,
}

impl InMemoryPhotoStore {
    /// Creates a store holding `items`, sorted newest first.
    #[must_use]
    pub fn new(mut items: Vec<MediaItem>) -> Self {
        // Stable sort keeps insertion order among equal timestamps
        items.sort_by(|a, b| b.uploaded_at().cmp(&a.uploaded_at()));
        Self {
            items,
            ..Self::default()
        }
    }

    /// A store with `per_category` generated photos in every category.
    #[must_use]
    pub fn with_sample_photos(per_category: usize) -> Self {
        Self::new(sample_photos(per_category))
    }

    /// Makes the next `count` calls fail with [`StoreError::Other`].
    pub fn fail_next(&self, count: u32) {
        self.failures_left.store(count, Ordering::SeqCst);
    }

    /// Number of `fetch_page` calls received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries received so far, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn page(&self, query: PageQuery) -> StoreResult<Vec<MediaItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query);
        }

        let failing = self
            .failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failing {
            return Err(StoreError::Other("injected failure".into()));
        }

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let filter = query.category.map_or(CategoryFilter::All, CategoryFilter::Only);
        Ok(self
            .items
            .iter()
            .filter(|item| filter.matches(item.category()))
            .skip(offset)
            .take(query.page_size.as_usize())
            .cloned()
            .collect())
    }
}

impl PhotoStore for InMemoryPhotoStore {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'_, StoreResult<Vec<MediaItem>>> {
        let result = self.page(query);
        Box::pin(async move { result })
    }
}

/// [`AssetSource`] that serves bytes from a map. Unknown URLs get a small
/// placeholder payload unless strict mode is on.
#[derive(Debug, Default)]
pub struct InMemoryAssetSource {
    assets: HashMap<String, Vec<u8>>,
    strict: bool,
    requests: Mutex<Vec<String>>,
}

impl InMemoryAssetSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown URLs fail with a 404.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    #[must_use]
    pub fn with_asset(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.assets.insert(url.into(), bytes);
        self
    }

    /// URLs requested so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn lookup(&self, url: String) -> StoreResult<Vec<u8>> {
        let found = self.assets.get(&url).cloned();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.clone());
        }
        match found {
            Some(bytes) => Ok(bytes),
            None if self.strict => Err(StoreError::Http { status: 404 }),
            None => Ok(url.into_bytes()),
        }
    }
}

impl AssetSource for InMemoryAssetSource {
    fn fetch_asset(&self, url: String) -> BoxFuture<'_, StoreResult<Vec<u8>>> {
        let result = self.lookup(url);
        Box::pin(async move { result })
    }
}

/// Generates `per_category` photos per category with staggered upload times.
///
/// Every third photo only has its original URL, like a fresh upload whose
/// resized variants are not ready yet.
#[must_use]
pub fn sample_photos(per_category: usize) -> Vec<MediaItem> {
    let base: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_700);
    let mut items = Vec::with_capacity(per_category * Category::ALL.len());
    let mut minute: i64 = 0;

    for n in 0..per_category {
        for category in Category::ALL {
            let id = format!("{}-{n}", category.label());
            let root = format!("https://photos.example/{id}");
            let mut variants = ResolutionSet::from_variant(ResolutionVariant::Full, format!("{root}.jpg"));
            if n % 3 != 2 {
                variants = variants
                    .with(ResolutionVariant::Thumbnail, format!("{root}_thumb.jpg"))
                    .with(ResolutionVariant::Medium, format!("{root}_medium.jpg"))
                    .with(ResolutionVariant::Large, format!("{root}_large.jpg"));
            }
            items.push(MediaItem::new(id, category, variants, base + Duration::minutes(minute)));
            minute += 1;
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::PageSize;

    fn query(category: Option<Category>, page: u32, size: u32) -> PageQuery {
        PageQuery {
            category,
            page,
            page_size: PageSize::new(size),
        }
    }

    #[tokio::test]
    async fn pages_are_offset_slices_newest_first() {
        let store = InMemoryPhotoStore::with_sample_photos(5);
        let first = store.fetch_page(query(None, 0, 8)).await.unwrap();
        let second = store.fetch_page(query(None, 1, 8)).await.unwrap();
        let third = store.fetch_page(query(None, 2, 8)).await.unwrap();

        assert_eq!(first.len(), 8);
        assert_eq!(second.len(), 8);
        assert_eq!(third.len(), 4);
        assert!(first[0].uploaded_at() > first[1].uploaded_at());
        assert!(first[7].uploaded_at() > second[0].uploaded_at());
        assert_eq!(store.calls(), 3);
    }

    #[tokio::test]
    async fn category_filter_applies_before_pagination() {
        let store = InMemoryPhotoStore::with_sample_photos(5);
        let page = store
            .fetch_page(query(Some(Category::Events), 0, 20))
            .await
            .unwrap();
        assert_eq!(page.len(), 5);
        assert!(page.iter().all(|item| item.category() == Category::Events));
    }

    #[tokio::test]
    async fn fail_next_injects_failures() {
        let store = InMemoryPhotoStore::with_sample_photos(1);
        store.fail_next(2);
        assert!(store.fetch_page(query(None, 0, 5)).await.is_err());
        assert!(store.fetch_page(query(None, 0, 5)).await.is_err());
        assert!(store.fetch_page(query(None, 0, 5)).await.is_ok());
        assert_eq!(store.queries().len(), 3);
    }

    #[tokio::test]
    async fn asset_source_serves_known_and_placeholder_bytes() {
        let source = InMemoryAssetSource::new().with_asset("a", vec![9, 9]);
        assert_eq!(source.fetch_asset("a".into()).await.unwrap(), vec![9, 9]);
        assert_eq!(source.fetch_asset("b".into()).await.unwrap(), b"b".to_vec());
        assert_eq!(source.requests(), vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn strict_asset_source_rejects_unknown_urls() {
        let source = InMemoryAssetSource::new().strict();
        assert_eq!(
            source.fetch_asset("nope".into()).await,
            Err(StoreError::Http { status: 404 })
        );
    }

    #[test]
    fn sample_photos_have_unique_ids_and_some_bare_uploads() {
        let items = sample_photos(3);
        let mut ids: Vec<&str> = items.iter().map(|i| i.id().as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
        assert!(items.iter().any(|i| i.variants().populated() == 1));
    }
}
