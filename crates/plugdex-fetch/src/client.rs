// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for registry documents.

use std::time::Duration;

use async_trait::async_trait;
use plugdex_core::{Fetcher, PlugdexError};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("plugdex/", env!("CARGO_PKG_VERSION"));

/// `reqwest`-backed [`Fetcher`].
///
/// A non-success status is reported as `PlugdexError::Fetch` so the caller
/// can move on to the next source. No retries happen here.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, PlugdexError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| PlugdexError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, PlugdexError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PlugdexError::Fetch {
                url: url.to_string(),
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        debug!(%url, status = %status, "registry response received");

        if !status.is_success() {
            return Err(PlugdexError::Fetch {
                url: url.to_string(),
                message: format!("HTTP error status {status}"),
            });
        }

        response.text().await.map_err(|e| PlugdexError::Fetch {
            url: url.to_string(),
            message: format!("failed to read response body: {e}"),
        })
    }
}
