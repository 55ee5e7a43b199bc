// SPDX-License-Identifier: MPL-2.0
//! Category filter for the gallery.
//!
//! The filter bar offers a fixed set of categories plus a "show all"
//! sentinel. Selecting an entry starts a new filter session in the loader.

use super::types::{Category, UnknownCategory};
use std::fmt;
use std::str::FromStr;

/// Sentinel name for "no category filter".
pub const SHOW_ALL: &str = "ALL";

/// Active category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show a single category.
    Only(Category),
}

impl CategoryFilter {
    /// Entries of the filter bar, in display order.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Portraits),
        CategoryFilter::Only(Category::Events),
        CategoryFilter::Only(Category::Weddings),
        CategoryFilter::Only(Category::Extras),
    ];

    /// Category to send to the store, or `None` when the filter is omitted.
    #[must_use]
    pub fn category(self) -> Option<Category> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category),
        }
    }

    /// Returns `true` if a record of `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    /// Returns `true` if this filter restricts results.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// Lower-case button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(SHOW_ALL),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(SHOW_ALL) {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}
