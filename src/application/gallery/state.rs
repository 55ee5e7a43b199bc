// SPDX-License-Identifier: MPL-2.0
//! Per-session loader state.
//!
//! A [`LoaderState`] lives for exactly one filter session. Changing the
//! category replaces it wholesale with a fresh one carrying the next
//! [`SessionToken`].

use crate::domain::media::{CategoryFilter, MediaId, MediaItem};
use std::collections::HashSet;
use std::fmt;

/// Request generation counter.
///
/// Every response carries the token that was live when its request was
/// issued; a mismatch on arrival means the session it belonged to is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionToken(u64);

impl SessionToken {
    /// Creates a token from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The token for the following session.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pagination state of one filter session.
#[derive(Debug, Clone)]
pub struct LoaderState {
    filter: CategoryFilter,
    items: Vec<MediaItem>,
    seen: HashSet<MediaId>,
    page: u32,
    exhausted: bool,
    token: SessionToken,
    in_flight: bool,
}

impl LoaderState {
    /// Creates an empty session for `filter`.
    #[must_use]
    pub fn new(filter: CategoryFilter, token: SessionToken) -> Self {
        Self {
            filter,
            items: Vec::new(),
            seen: HashSet::new(),
            page: 0,
            exhausted: false,
            token,
            in_flight: false,
        }
    }

    /// Returns the state that replaces this one when the filter changes.
    #[must_use]
    pub fn successor(&self, filter: CategoryFilter) -> Self {
        Self::new(filter, self.token.next())
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Loaded items in arrival order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Next page index to request.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns `true` if a new request may be issued.
    #[must_use]
    pub fn can_fetch(&self) -> bool {
        !self.in_flight && !self.exhausted
    }

    pub(crate) fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }

    pub(crate) fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    pub(crate) fn advance_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Appends the items whose identifier is not loaded yet.
    ///
    /// Returns the range of `items` that was appended.
    pub(crate) fn merge(&mut self, incoming: Vec<MediaItem>) -> std::ops::Range<usize> {
        let start = self.items.len();
        for item in incoming {
            if self.seen.insert(item.id().clone()) {
                self.items.push(item);
            }
        }
        start..self.items.len()
    }
}
