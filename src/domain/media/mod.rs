// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the photo record, its resolution variants and the
//! category filter, independent of any store or presentation concerns.

pub mod filter;
pub mod resolution;
pub mod types;

// Re-export commonly used types
pub use filter::{CategoryFilter, SHOW_ALL};
pub use resolution::{ResolutionClass, ResolutionSet, ResolutionVariant};
pub use types::{Category, MediaId, MediaItem, UnknownCategory};
