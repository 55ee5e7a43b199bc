// SPDX-License-Identifier: MPL-2.0
//! `studio_gallery` is the incremental gallery loader behind a photography
//! studio's portfolio page.
//!
//! It pages photos out of a hosted store, merges them into a de-duplicated
//! grid, discards responses that belong to an abandoned category filter, and
//! warms images ahead of the grid and the lightbox.

#![doc(html_root_url = "https://docs.rs/studio_gallery/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod media;
