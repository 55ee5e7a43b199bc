// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`rest`]: Paginated photo queries against the hosted REST API (implements [`PhotoStore`])
//! - [`http_assets`]: Image downloads over HTTP (implements [`AssetSource`])
//! - [`memory`]: Deterministic in-memory store and asset source
//!
//! [`PhotoStore`]: crate::application::port::PhotoStore
//! [`AssetSource`]: crate::application::port::AssetSource

pub mod http_assets;
pub mod memory;
pub mod rest;

// Re-export main types for convenience
pub use http_assets::HttpAssetSource;
pub use memory::{InMemoryAssetSource, InMemoryPhotoStore};
pub use rest::{RestPhotoStore, RestStoreConfig};
