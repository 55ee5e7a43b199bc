// SPDX-License-Identifier: MPL-2.0
//! End-to-end loader scenarios against in-memory adapters.

use chrono::{DateTime, Duration, Utc};
use futures_util::future::BoxFuture;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use studio_gallery::application::gallery::{
    FetchOutcome, GalleryLoader, LoaderSettings, ScrollMetrics, LOAD_ERROR_MESSAGE,
};
use studio_gallery::application::port::{PageQuery, PhotoStore, StoreResult};
use studio_gallery::diagnostics::GalleryEventKind;
use studio_gallery::domain::media::{
    Category, CategoryFilter, MediaItem, ResolutionClass, ResolutionSet, ResolutionVariant,
};
use studio_gallery::infrastructure::{InMemoryAssetSource, InMemoryPhotoStore};

fn photo(id: &str, category: Category, minute: i64) -> MediaItem {
    let base: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH + Duration::days(19_000);
    MediaItem::new(
        id,
        category,
        ResolutionSet::from_variant(ResolutionVariant::Full, format!("https://cdn.test/{id}.jpg"))
            .with(
                ResolutionVariant::Thumbnail,
                format!("https://cdn.test/{id}_thumb.jpg"),
            ),
        base + Duration::minutes(minute),
    )
}

fn photos(category: Category, count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|n| {
            let id = format!("{}-{n}", category.label());
            photo(&id, category, i64::try_from(n).unwrap())
        })
        .collect()
}

fn loader_for(store: Arc<dyn PhotoStore>) -> GalleryLoader {
    GalleryLoader::new(
        store,
        Arc::new(InMemoryAssetSource::new()),
        LoaderSettings::default(),
    )
}

/// Near the bottom of the grid.
fn bottom() -> ScrollMetrics {
    ScrollMetrics::new(2000.0, 800.0, 3000.0)
}

async fn scroll_to_bottom(loader: &mut GalleryLoader) -> Option<FetchOutcome> {
    let pending = loader.on_scroll(bottom())?;
    let response = pending.resolve().await;
    Some(loader.handle_page(response))
}

/// Returns scripted pages in order, regardless of the query.
struct ScriptedStore {
    pages: Mutex<VecDeque<Vec<MediaItem>>>,
    calls: AtomicUsize,
}

impl ScriptedStore {
    fn new(pages: Vec<Vec<MediaItem>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl PhotoStore for ScriptedStore {
    fn fetch_page(&self, _query: PageQuery) -> BoxFuture<'_, StoreResult<Vec<MediaItem>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let page = self.pages.lock().unwrap().pop_front().unwrap_or_default();
        Box::pin(async move { Ok(page) })
    }
}

#[tokio::test]
async fn overlapping_pages_keep_each_identifier_once_in_first_arrival_order() {
    let events = Category::Events;
    let mut first: Vec<MediaItem> = (0..20).map(|n| photo(&format!("e{n}"), events, n)).collect();
    first[19] = photo("e0", events, 0);
    let second: Vec<MediaItem> = (15..35).map(|n| photo(&format!("e{n}"), events, n)).collect();
    let third = vec![photo("e34", events, 34), photo("e99", events, 99)];

    let store = Arc::new(ScriptedStore::new(vec![first, second, third]));
    let mut loader = loader_for(store.clone());

    while scroll_to_bottom(&mut loader).await.is_some() {}

    let ids: Vec<&str> = loader.items().iter().map(|i| i.id().as_str()).collect();
    let mut expected: Vec<String> = (0..19).map(|n| format!("e{n}")).collect();
    expected.extend((19..35).map(|n| format!("e{n}")));
    expected.push("e99".to_string());
    assert_eq!(ids, expected);
    assert!(loader.state().is_exhausted());
    // Three scripted pages plus the empty one that ends the session
    assert_eq!(store.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn response_for_abandoned_filter_never_appears() {
    let mut items = photos(Category::Events, 20);
    items.extend(photos(Category::Weddings, 8));
    let store = Arc::new(InMemoryPhotoStore::new(items));
    let mut loader = loader_for(store.clone());

    loader.set_category(Category::Events);
    let events_request = loader.fetch_next_page().expect("request issued");

    loader.set_category(Category::Weddings);
    let weddings_request = loader.fetch_next_page().expect("new session may fetch");

    // Wedding page lands first, the old events page afterwards
    let weddings = weddings_request.resolve().await;
    let events = events_request.resolve().await;
    assert_eq!(
        loader.handle_page(weddings),
        FetchOutcome::Appended {
            received: 8,
            appended: 8
        }
    );
    assert_eq!(loader.handle_page(events), FetchOutcome::Stale);

    assert_eq!(loader.items().len(), 8);
    assert!(loader
        .items()
        .iter()
        .all(|item| item.category() == Category::Weddings));
    assert!(loader.error().is_none());
    assert!(loader
        .log()
        .iter()
        .all(|event| !matches!(event.kind, GalleryEventKind::PageFailed { .. })));
}

#[tokio::test]
async fn stale_response_arriving_before_new_fetch_is_discarded() {
    let store = Arc::new(InMemoryPhotoStore::new(photos(Category::Portraits, 20)));
    let mut loader = loader_for(store.clone());

    let pending = loader.fetch_next_page().expect("request issued");
    loader.set_category(Category::Extras);
    let outcome = loader.handle_page(pending.resolve().await);

    assert_eq!(outcome, FetchOutcome::Stale);
    assert!(loader.items().is_empty());
    assert_eq!(loader.state().page(), 0);
    assert!(loader.fetch_next_page().is_some());
}

#[tokio::test]
async fn exhausted_session_issues_no_more_store_calls() {
    let store = Arc::new(InMemoryPhotoStore::new(photos(Category::Extras, 7)));
    let mut loader = loader_for(store.clone());

    assert_eq!(
        scroll_to_bottom(&mut loader).await,
        Some(FetchOutcome::Appended {
            received: 7,
            appended: 7
        })
    );
    assert_eq!(
        scroll_to_bottom(&mut loader).await,
        Some(FetchOutcome::Exhausted { appended: 0 })
    );
    let page = loader.state().page();

    for _ in 0..10 {
        assert!(loader.fetch_next_page().is_none());
        assert!(scroll_to_bottom(&mut loader).await.is_none());
    }
    assert_eq!(store.calls(), 2);
    assert_eq!(loader.items().len(), 7);
    assert_eq!(loader.state().page(), page);

    loader.set_category(CategoryFilter::All);
    assert!(loader.fetch_next_page().is_some());
}

#[tokio::test]
async fn back_to_back_fetches_make_one_store_call() {
    let store = Arc::new(InMemoryPhotoStore::new(photos(Category::Portraits, 50)));
    let mut loader = loader_for(store.clone());

    let first = loader.fetch_next_page();
    let second = loader.fetch_next_page();
    assert!(first.is_some());
    assert!(second.is_none());
    assert!(loader.on_scroll(bottom()).is_none());

    if let Some(pending) = first {
        loader.handle_page(pending.resolve().await);
    }
    assert_eq!(store.calls(), 1);
    assert_eq!(loader.items().len(), 20);
}

#[test]
fn resolution_fallback_covers_partial_and_complete_records() {
    let only_full = MediaItem::new(
        "solo",
        Category::Portraits,
        ResolutionSet::from_variant(ResolutionVariant::Full, "https://cdn.test/solo.jpg"),
        Utc::now(),
    );
    assert_eq!(only_full.thumbnail_url(), "https://cdn.test/solo.jpg");
    assert_eq!(only_full.full_url(), "https://cdn.test/solo.jpg");

    let complete = MediaItem::new(
        "all",
        Category::Portraits,
        ResolutionSet::new(
            Some("t".into()),
            Some("m".into()),
            Some("l".into()),
            Some("f".into()),
        )
        .expect("urls present"),
        Utc::now(),
    );
    assert_eq!(complete.url(ResolutionClass::Thumbnail), "t");
    assert_eq!(complete.url(ResolutionClass::Medium), "m");
    assert_eq!(complete.url(ResolutionClass::Large), "l");
    assert_eq!(complete.url(ResolutionClass::Full), "f");
}

#[tokio::test]
async fn portraits_scroll_through_twenty_five_photos() {
    let mut items = photos(Category::Portraits, 25);
    items.extend(photos(Category::Events, 10));
    let store = Arc::new(InMemoryPhotoStore::new(items));
    let mut loader = loader_for(store.clone());
    loader.set_category("PORTRAITS".parse::<CategoryFilter>().unwrap());

    let outcomes = [
        scroll_to_bottom(&mut loader).await,
        scroll_to_bottom(&mut loader).await,
        scroll_to_bottom(&mut loader).await,
    ];
    assert_eq!(
        outcomes[0],
        Some(FetchOutcome::Appended {
            received: 20,
            appended: 20
        })
    );
    assert_eq!(
        outcomes[1],
        Some(FetchOutcome::Appended {
            received: 5,
            appended: 5
        })
    );
    assert_eq!(outcomes[2], Some(FetchOutcome::Exhausted { appended: 0 }));

    assert_eq!(loader.items().len(), 25);
    assert!(loader.state().is_exhausted());
    assert_eq!(loader.state().page(), 2);
    let pages: Vec<u32> = store.queries().iter().map(|q| q.page).collect();
    assert_eq!(pages, vec![0, 1, 2]);

    let calls = store.calls();
    assert!(scroll_to_bottom(&mut loader).await.is_none());
    assert_eq!(store.calls(), calls);
}

#[tokio::test]
async fn full_pages_then_empty_page_exhausts() {
    let store = Arc::new(ScriptedStore::new(vec![
        photos(Category::Portraits, 20),
        photos(Category::Events, 20),
        Vec::new(),
    ]));
    let mut loader = loader_for(store.clone());

    for _ in 0..3 {
        scroll_to_bottom(&mut loader).await;
    }
    assert_eq!(loader.items().len(), 40);
    assert!(loader.state().is_exhausted());
    assert_eq!(loader.state().page(), 2);

    assert!(scroll_to_bottom(&mut loader).await.is_none());
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn switching_filter_starts_from_scratch() {
    let mut items = photos(Category::Events, 12);
    items.extend(photos(Category::Weddings, 4));
    let store = Arc::new(InMemoryPhotoStore::new(items));
    let mut loader = loader_for(store.clone());

    loader.set_category(Category::Events);
    while scroll_to_bottom(&mut loader).await.is_some() {}
    assert!(loader.state().is_exhausted());
    assert_eq!(loader.items().len(), 12);

    loader.set_category("weddings".parse::<CategoryFilter>().unwrap());
    assert!(loader.items().is_empty());
    assert_eq!(loader.state().page(), 0);
    assert!(!loader.state().is_exhausted());

    scroll_to_bottom(&mut loader).await;
    assert_eq!(loader.items().len(), 4);
    assert!(loader
        .items()
        .iter()
        .all(|item| item.category() == Category::Weddings));
    assert_eq!(
        store.queries().last().and_then(|q| q.category),
        Some(Category::Weddings)
    );
}

#[tokio::test]
async fn failed_page_is_retried_by_next_trigger() {
    let store = Arc::new(InMemoryPhotoStore::new(photos(Category::Events, 30)));
    let mut loader = loader_for(store.clone());
    store.fail_next(1);

    assert_eq!(scroll_to_bottom(&mut loader).await, Some(FetchOutcome::Failed));
    assert_eq!(loader.view().error_message(), Some(LOAD_ERROR_MESSAGE));
    assert!(loader.items().is_empty());

    assert_eq!(
        scroll_to_bottom(&mut loader).await,
        Some(FetchOutcome::Appended {
            received: 20,
            appended: 20
        })
    );
    assert!(loader.error().is_none());
    let pages: Vec<u32> = store.queries().iter().map(|q| q.page).collect();
    assert_eq!(pages, vec![0, 0]);
}

#[tokio::test]
async fn prefetched_assets_are_served_and_cleared_on_filter_change() {
    let store = Arc::new(InMemoryPhotoStore::new(photos(Category::Events, 20)));
    let assets = Arc::new(InMemoryAssetSource::new());
    let mut loader = GalleryLoader::new(store, assets.clone(), LoaderSettings::default());

    scroll_to_bottom(&mut loader).await;
    for pending in loader.take_prefetch() {
        let response = pending.resolve().await;
        assert!(loader.store_prefetched(response));
    }
    assert_eq!(assets.requests().len(), 5);

    let newest_thumb = loader.items()[0].thumbnail_url().to_string();
    assert!(loader.prefetched(&newest_thumb).is_some());

    loader.set_category(Category::Portraits);
    assert!(loader.prefetched(&newest_thumb).is_none());
}
