// SPDX-License-Identifier: MPL-2.0
//! Image asset handling.
//!
//! Photo records live in [`crate::domain::media`]; this module deals with the
//! image bytes behind their URLs.

pub mod prefetch;

pub use prefetch::{AssetPrefetchCache, PrefetchConfig, PrefetchStats};
