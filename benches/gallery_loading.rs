// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery loading operations.
//!
//! Measures the performance of:
//! - Merging pages into a large, partly duplicated item list
//! - The per-tick scroll decision
//! - Viewer navigation with prefetch scheduling

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use studio_gallery::application::gallery::{
    GalleryLoader, LoaderSettings, PageResponse, ScrollMetrics,
};
use studio_gallery::domain::gallery::PageSize;
use studio_gallery::domain::media::MediaItem;
use studio_gallery::infrastructure::memory::sample_photos;
use studio_gallery::infrastructure::{InMemoryAssetSource, InMemoryPhotoStore};

fn new_loader(page_size: u32) -> GalleryLoader {
    GalleryLoader::new(
        Arc::new(InMemoryPhotoStore::new(Vec::new())),
        Arc::new(InMemoryAssetSource::new()),
        LoaderSettings::default().with_page_size(PageSize::new(page_size)),
    )
}

/// Feeds `pages` through the loader, each overlapping the previous by half.
fn merge_pages(pages: &[Vec<MediaItem>]) -> usize {
    let mut loader = new_loader(100);
    for page in pages {
        let Some(pending) = loader.fetch_next_page() else {
            break;
        };
        loader.handle_page(PageResponse {
            request: pending.request(),
            result: Ok(page.clone()),
        });
        loader.take_prefetch();
    }
    loader.items().len()
}

/// Benchmark page merging with de-duplication.
fn bench_merge_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_loading");

    let photos = sample_photos(500);
    let pages: Vec<Vec<MediaItem>> = (0..39)
        .map(|n| photos[n * 50..n * 50 + 100].to_vec())
        .collect();

    group.bench_function("merge_overlapping_pages", |b| {
        b.iter(|| black_box(merge_pages(black_box(&pages))));
    });

    group.finish();
}

/// Benchmark the scroll decision called on every tick.
fn bench_scroll_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_loading");
    let loader = new_loader(20);

    group.bench_function("trigger_load_if_near_bottom", |b| {
        let mut position = 0.0;
        b.iter(|| {
            position = (position + 13.0) % 10_000.0;
            black_box(loader.trigger_load_if_near_bottom(ScrollMetrics::new(
                position, 800.0, 10_000.0,
            )))
        });
    });

    group.finish();
}

/// Benchmark lightbox navigation including prefetch scheduling.
fn bench_viewer_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_loading");

    let mut loader = new_loader(100);
    if let Some(pending) = loader.fetch_next_page() {
        loader.handle_page(PageResponse {
            request: pending.request(),
            result: Ok(sample_photos(25)),
        });
    }
    loader.open_viewer(0);

    group.bench_function("viewer_next", |b| {
        b.iter(|| {
            black_box(loader.viewer_next());
            loader.take_prefetch();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_pages,
    bench_scroll_decision,
    bench_viewer_navigation
);
criterion_main!(benches);
