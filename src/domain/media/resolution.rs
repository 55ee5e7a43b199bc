// SPDX-License-Identifier: MPL-2.0
//! Resolution variants and the fallback rules used to pick a URL.
//!
//! The resize pipeline populates variants in the background, so a freshly
//! uploaded photo may only carry its full-size URL. Every lookup therefore
//! walks an ordered list of variants and takes the first one present.

/// One pre-rendered size of the same source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionVariant {
    /// ~400 px wide.
    Thumbnail,
    /// ~800 px wide.
    Medium,
    /// ~1600 px wide.
    Large,
    /// Original upload.
    Full,
}

impl ResolutionVariant {
    /// Nominal width advertised in `srcset` descriptors.
    #[must_use]
    pub const fn nominal_width(self) -> u32 {
        match self {
            ResolutionVariant::Thumbnail => 400,
            ResolutionVariant::Medium => 800,
            ResolutionVariant::Large => 1600,
            ResolutionVariant::Full => 2400,
        }
    }
}

/// Display class a call site asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionClass {
    /// Grid tiles.
    Thumbnail,
    Medium,
    Large,
    /// Lightbox.
    Full,
}

impl ResolutionClass {
    /// Variants to try, most specific first.
    #[must_use]
    pub const fn lookup_order(self) -> [ResolutionVariant; 4] {
        use ResolutionVariant::{Full, Large, Medium, Thumbnail};
        match self {
            ResolutionClass::Thumbnail => [Thumbnail, Medium, Large, Full],
            ResolutionClass::Medium => [Medium, Large, Full, Thumbnail],
            ResolutionClass::Large => [Large, Full, Medium, Thumbnail],
            ResolutionClass::Full => [Full, Large, Medium, Thumbnail],
        }
    }
}

/// The URLs known for one photo. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionSet {
    thumbnail: Option<String>,
    medium: Option<String>,
    large: Option<String>,
    full: Option<String>,
}

impl ResolutionSet {
    /// Builds a set from optional URLs.
    ///
    /// Empty strings count as absent. Returns `None` when no URL is left,
    /// since such a record cannot be rendered anywhere.
    #[must_use]
    pub fn new(
        thumbnail: Option<String>,
        medium: Option<String>,
        large: Option<String>,
        full: Option<String>,
    ) -> Option<Self> {
        let set = Self {
            thumbnail: non_empty(thumbnail),
            medium: non_empty(medium),
            large: non_empty(large),
            full: non_empty(full),
        };
        set.has_any().then_some(set)
    }

    /// Builds a set with a single variant.
    ///
    /// The URL must be non-empty; an empty one is kept as-is so the set
    /// still resolves to something.
    pub fn from_variant(variant: ResolutionVariant, url: impl Into<String>) -> Self {
        let mut set = Self {
            thumbnail: None,
            medium: None,
            large: None,
            full: None,
        };
        *set.slot_mut(variant) = Some(url.into());
        set
    }

    /// Adds or replaces one variant. Empty URLs are ignored.
    #[must_use]
    pub fn with(mut self, variant: ResolutionVariant, url: impl Into<String>) -> Self {
        if let Some(url) = non_empty(Some(url.into())) {
            *self.slot_mut(variant) = Some(url);
        }
        self
    }

    /// URL of exactly this variant, if populated.
    #[must_use]
    pub fn get(&self, variant: ResolutionVariant) -> Option<&str> {
        match variant {
            ResolutionVariant::Thumbnail => self.thumbnail.as_deref(),
            ResolutionVariant::Medium => self.medium.as_deref(),
            ResolutionVariant::Large => self.large.as_deref(),
            ResolutionVariant::Full => self.full.as_deref(),
        }
    }

    /// Best URL for a display class, following its lookup order.
    #[must_use]
    pub fn resolve(&self, class: ResolutionClass) -> &str {
        // Every lookup order covers all four variants and the set is never
        // empty, so the fallback is unreachable.
        class
            .lookup_order()
            .into_iter()
            .find_map(|variant| self.get(variant))
            .unwrap_or_default()
    }

    /// Responsive `srcset` value covering all four classes.
    #[must_use]
    pub fn srcset(&self) -> String {
        [
            (ResolutionClass::Thumbnail, ResolutionVariant::Thumbnail),
            (ResolutionClass::Medium, ResolutionVariant::Medium),
            (ResolutionClass::Large, ResolutionVariant::Large),
            (ResolutionClass::Full, ResolutionVariant::Full),
        ]
        .into_iter()
        .map(|(class, variant)| format!("{} {}w", self.resolve(class), variant.nominal_width()))
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Number of populated variants.
    #[must_use]
    pub fn populated(&self) -> usize {
        [&self.thumbnail, &self.medium, &self.large, &self.full]
            .into_iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    fn has_any(&self) -> bool {
        self.populated() > 0
    }

    fn slot_mut(&mut self, variant: ResolutionVariant) -> &mut Option<String> {
        match variant {
            ResolutionVariant::Thumbnail => &mut self.thumbnail,
            ResolutionVariant::Medium => &mut self.medium,
            ResolutionVariant::Large => &mut self.large,
            ResolutionVariant::Full => &mut self.full,
        }
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}
