// SPDX-License-Identifier: MPL-2.0
//! REST adapter for the hosted photo store.
//!
//! Talks to a PostgREST-style endpoint:
//!
//! ```text
//! GET {base_url}/rest/v1/photos?select=*&order=created_at.desc&offset=40&limit=20&category=ilike.EVENTS
//! apikey: {anon_key}
//! Authorization: Bearer {anon_key}
//! ```

mod row;

pub use row::{PhotoRow, RowId};

use crate::application::port::{PageQuery, PhotoStore, StoreError, StoreResult};
use crate::domain::media::MediaItem;
use futures_util::future::BoxFuture;
use std::time::Duration;

/// Path of the photos table below the base URL.
pub const PHOTOS_PATH: &str = "/rest/v1/photos";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("studio-gallery/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`RestPhotoStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestStoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub base_url: String,
    /// Public anonymous key, sent as `apikey` and bearer token.
    pub anon_key: String,
    pub timeout: Duration,
}

impl RestStoreConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the photos table.
    #[must_use]
    pub fn photos_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PHOTOS_PATH)
    }
}

/// [`PhotoStore`] backed by the hosted REST API.
#[derive(Debug, Clone)]
pub struct RestPhotoStore {
    client: reqwest::Client,
    config: RestStoreConfig,
}

impl RestPhotoStore {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Other`] if the TLS backend cannot be initialized.
    pub fn new(config: RestStoreConfig) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Other(e.to_string()))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &RestStoreConfig {
        &self.config
    }

    async fn fetch(&self, query: PageQuery) -> StoreResult<Vec<MediaItem>> {
        let params = query_params(&query);

        let response = self
            .client
            .get(self.config.photos_url())
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
            .query(&params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Http {
                status: status.as_u16(),
            });
        }

        let rows: Vec<PhotoRow> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout
            } else {
                StoreError::Decode(e.to_string())
            }
        })?;

        rows.into_iter().map(MediaItem::try_from).collect()
    }
}

impl PhotoStore for RestPhotoStore {
    fn fetch_page(&self, query: PageQuery) -> BoxFuture<'_, StoreResult<Vec<MediaItem>>> {
        Box::pin(self.fetch(query))
    }
}

/// Query string for one page, filter last.
#[must_use]
pub fn query_params(query: &PageQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("select", "*".to_string()),
        ("order", "created_at.desc".to_string()),
        ("offset", query.offset().to_string()),
        ("limit", query.limit().to_string()),
    ];
    if let Some(category) = query.category {
        params.push(("category", format!("ilike.{}", category.as_str())));
    }
    params
}

pub(crate) fn map_transport_error(error: reqwest::Error) -> StoreError {
    if error.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Network(error.to_string())
    }
}
