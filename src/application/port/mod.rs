// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`photo_store`]: Paginated, filterable photo queries
//! - [`asset_source`]: Image byte downloads used for cache warming
//!
//! # Design Notes
//!
//! - All traits use domain types only (no HTTP client types leak through)
//! - Traits are `Send + Sync` so work can be spawned on any executor
//! - Methods return `BoxFuture`s with [`StoreError`] as the error type
//!
//! # Example
//!
//! ```ignore
//! use studio_gallery::application::port::{PageQuery, PhotoStore};
//!
//! async fn first_page(store: &dyn PhotoStore) -> usize {
//!     let query = PageQuery { category: None, page: 0, page_size: Default::default() };
//!     store.fetch_page(query).await.map(|items| items.len()).unwrap_or(0)
//! }
//! ```

pub mod asset_source;
pub mod photo_store;

// Re-export main types for convenience
pub use asset_source::AssetSource;
pub use photo_store::{PageQuery, PhotoStore, StoreError, StoreResult};
