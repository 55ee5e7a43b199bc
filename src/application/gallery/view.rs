// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshot handed to the grid renderer.

use crate::application::port::StoreError;
use crate::domain::media::{CategoryFilter, MediaItem};
use thiserror::Error;

/// Inline message shown when a page fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load photos. Please try again later.";

/// Message shown when a finished session has no photos.
pub const EMPTY_MESSAGE: &str = "No photos found in this category.";

/// The inline error state. Displays as the user-facing message; the store
/// error is kept as the source for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load photos. Please try again later.")]
pub struct LoadError {
    #[source]
    cause: StoreError,
}

impl LoadError {
    #[must_use]
    pub fn new(cause: StoreError) -> Self {
        Self { cause }
    }

    #[must_use]
    pub fn cause(&self) -> &StoreError {
        &self.cause
    }
}

/// What the grid should draw right now.
#[derive(Debug, Clone, Copy)]
pub struct GalleryView<'a> {
    pub items: &'a [MediaItem],
    pub filter: CategoryFilter,
    /// First page of the session is loading.
    pub is_loading_initial: bool,
    /// A later page is loading below existing items.
    pub is_loading_more: bool,
    /// The session finished without a single photo.
    pub is_empty: bool,
    pub error: Option<&'a LoadError>,
    pub show_scroll_to_top: bool,
}

impl GalleryView<'_> {
    /// Inline error text, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(|_| LOAD_ERROR_MESSAGE)
    }

    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty.then_some(EMPTY_MESSAGE)
    }
}
