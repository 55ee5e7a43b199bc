// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for downloading image bytes.

use super::rest::map_transport_error;
use crate::application::port::{AssetSource, StoreError, StoreResult};
use futures_util::future::BoxFuture;
use std::time::Duration;

/// [`AssetSource`] that downloads images with a plain GET.
#[derive(Debug, Clone)]
pub struct HttpAssetSource {
    client: reqwest::Client,
}

impl HttpAssetSource {
    /// # Errors
    ///
    /// Returns [`StoreError::Other`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> StoreResult<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    async fn download(&self, url: String) -> StoreResult<Vec<u8>> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(StoreError::Http {
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(bytes.to_vec())
    }
}

impl AssetSource for HttpAssetSource {
    fn fetch_asset(&self, url: String) -> BoxFuture<'_, StoreResult<Vec<u8>>> {
        Box::pin(self.download(url))
    }
}
