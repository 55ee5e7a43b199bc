// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use super::resolution::{ResolutionClass, ResolutionSet};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable, unique identifier of a photo record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Portfolio category a photo belongs to.
///
/// Names compare case-insensitively; the canonical spelling is upper case,
/// which is what the store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Portraits,
    Events,
    Weddings,
    Extras,
}

impl Category {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [Category; 4] = [
        Category::Portraits,
        Category::Events,
        Category::Weddings,
        Category::Extras,
    ];

    /// Canonical (upper case) name as stored by the photo store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Portraits => "PORTRAITS",
            Category::Events => "EVENTS",
            Category::Weddings => "WEDDINGS",
            Category::Extras => "EXTRAS",
        }
    }

    /// Lower-case label shown on filter buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Portraits => "portraits",
            Category::Events => "events",
            Category::Weddings => "weddings",
            Category::Extras => "extras",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// A single photo record as delivered by the photo store.
///
/// At least one resolution variant is always present; see [`ResolutionSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    id: MediaId,
    category: Category,
    variants: ResolutionSet,
    uploaded_at: DateTime<Utc>,
}

impl MediaItem {
    #[must_use]
    pub fn new(
        id: impl Into<MediaId>,
        category: Category,
        variants: ResolutionSet,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            variants,
            uploaded_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn variants(&self) -> &ResolutionSet {
        &self.variants
    }

    /// Upload time. Only used for ordering, which the store performs.
    #[must_use]
    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Best URL for the given display class.
    #[must_use]
    pub fn url(&self, class: ResolutionClass) -> &str {
        self.variants.resolve(class)
    }

    /// Shorthand for the grid tile URL.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        self.url(ResolutionClass::Thumbnail)
    }

    /// Shorthand for the lightbox URL.
    #[must_use]
    pub fn full_url(&self) -> &str {
        self.url(ResolutionClass::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::ResolutionVariant;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!("portraits".parse(), Ok(Category::Portraits));
        assert_eq!("Events".parse(), Ok(Category::Events));
        assert_eq!(" WEDDINGS ".parse(), Ok(Category::Weddings));
    }

    #[test]
    fn category_parse_rejects_unknown_names() {
        let err = "landscapes".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("landscapes".to_string()));
        assert_eq!(err.to_string(), "unknown category: landscapes");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn category_display_uses_canonical_name() {
        assert_eq!(Category::Extras.to_string(), "EXTRAS");
        assert_eq!(Category::Extras.label(), "extras");
    }

    #[test]
    fn media_item_exposes_resolved_urls() {
        let variants = ResolutionSet::from_variant(ResolutionVariant::Full, "https://cdn/full.jpg")
            .with(ResolutionVariant::Thumbnail, "https://cdn/thumb.jpg");
        let item = MediaItem::new("a1", Category::Events, variants, Utc::now());

        assert_eq!(item.id().as_str(), "a1");
        assert_eq!(item.thumbnail_url(), "https://cdn/thumb.jpg");
        assert_eq!(item.full_url(), "https://cdn/full.jpg");
    }
}
