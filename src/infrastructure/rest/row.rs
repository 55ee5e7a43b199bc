// SPDX-License-Identifier: MPL-2.0
//! Row mapping for the `photos` table.

use crate::application::port::StoreError;
use crate::domain::media::{Category, MediaItem, ResolutionSet};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of a row. The table has used both integer and UUID keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

/// One row as returned by the REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRow {
    pub id: RowId,
    pub category: String,
    /// Original upload, used as the full-size variant.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_thumb: Option<String>,
    #[serde(default)]
    pub url_medium: Option<String>,
    #[serde(default)]
    pub url_large: Option<String>,
    #[serde(default, alias = "uploaded_at")]
    pub created_at: Option<String>,
}

impl TryFrom<PhotoRow> for MediaItem {
    type Error = StoreError;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        let id = row.id.to_string();

        let category: Category = row
            .category
            .parse()
            .map_err(|e| StoreError::InvalidRecord(format!("row {id}: {e}")))?;

        let variants = ResolutionSet::new(row.url_thumb, row.url_medium, row.url_large, row.url)
            .ok_or_else(|| StoreError::InvalidRecord(format!("row {id}: no image URL")))?;

        let uploaded_at = row
            .created_at
            .as_deref()
            .and_then(parse_timestamp)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Ok(MediaItem::new(id, category, variants, uploaded_at))
    }
}

/// Parses an RFC 3339 timestamp, or a naive one taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::ResolutionClass;

    fn decode(json: &str) -> Result<MediaItem, StoreError> {
        let row: PhotoRow = serde_json::from_str(json).expect("row should deserialize");
        MediaItem::try_from(row)
    }

    #[test]
    fn full_row_maps_every_variant() {
        let item = decode(
            r#"{
                "id": 7,
                "category": "portraits",
                "url": "https://s/full.jpg",
                "url_thumb": "https://s/t.jpg",
                "url_medium": "https://s/m.jpg",
                "url_large": "https://s/l.jpg",
                "created_at": "2024-05-01T10:00:00.123456+00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(item.id().as_str(), "7");
        assert_eq!(item.category(), Category::Portraits);
        assert_eq!(item.thumbnail_url(), "https://s/t.jpg");
        assert_eq!(item.url(ResolutionClass::Medium), "https://s/m.jpg");
        assert_eq!(item.full_url(), "https://s/full.jpg");
        assert_eq!(item.uploaded_at().to_rfc3339(), "2024-05-01T10:00:00.123456+00:00");
    }

    #[test]
    fn only_original_url_resolves_everywhere() {
        let item = decode(
            r#"{"id": "a1", "category": "EVENTS", "url": "https://s/o.jpg", "url_thumb": null}"#,
        )
        .unwrap();
        assert_eq!(item.thumbnail_url(), "https://s/o.jpg");
        assert_eq!(item.full_url(), "https://s/o.jpg");
    }

    #[test]
    fn row_without_url_is_rejected() {
        let err = decode(r#"{"id": 1, "category": "EXTRAS", "url": ""}"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(msg) if msg.contains("no image URL")));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = decode(r#"{"id": 1, "category": "landscapes", "url": "u"}"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord(_)));
    }

    #[test]
    fn uploaded_at_alias_and_naive_timestamp() {
        let item = decode(
            r#"{"id": 2, "category": "weddings", "url": "u", "uploaded_at": "2024-01-02 03:04:05"}"#,
        )
        .unwrap();
        assert_eq!(item.uploaded_at().to_rfc3339(), "2024-01-02T03:04:05+00:00");
    }

    #[test]
    fn missing_timestamp_falls_back_to_epoch() {
        let item = decode(r#"{"id": 3, "category": "extras", "url": "u"}"#).unwrap();
        assert_eq!(item.uploaded_at(), DateTime::<Utc>::UNIX_EPOCH);
    }
}
