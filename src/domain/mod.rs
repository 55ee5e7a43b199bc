// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with no I/O.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It performs no network or filesystem access; the only external type it
//! uses is `chrono`'s timestamp.
//!
//! # Modules
//!
//! - [`gallery`]: Loader tunables ([`PageSize`](gallery::PageSize),
//!   [`ScrollThreshold`](gallery::ScrollThreshold), [`PrefetchCount`](gallery::PrefetchCount))
//! - [`media`]: Photo records ([`MediaItem`](media::MediaItem),
//!   [`Category`](media::Category), [`CategoryFilter`](media::CategoryFilter),
//!   [`ResolutionSet`](media::ResolutionSet))

pub mod gallery;
pub mod media;
