// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: The incremental gallery loader
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Front ends (the CLI, a renderer) drive the loader
//!
//! # Example
//!
//! ```ignore
//! use studio_gallery::application::gallery::{GalleryLoader, LoaderSettings};
//! use studio_gallery::infrastructure::rest::RestPhotoStore;
//!
//! let mut loader = GalleryLoader::new(store, assets, LoaderSettings::default());
//! if let Some(pending) = loader.on_scroll(metrics) {
//!     let response = pending.resolve().await;
//!     loader.handle_page(response);
//! }
//! ```

pub mod gallery;
pub mod port;
