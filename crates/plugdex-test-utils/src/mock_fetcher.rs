// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock fetcher with canned per-URL responses.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use plugdex_core::{Fetcher, PlugdexError};

/// A fetcher that answers from a fixed URL table and records every request.
///
/// URLs that were never configured fail like an unreachable host.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, Option<String>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a fetcher with no configured URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `body`.
    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Some(body.to_string()));
        self
    }

    /// Make `url` fail.
    pub fn with_failure(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), None);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get_text(&self, url: &str) -> Result<String, PlugdexError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        match self.responses.get(url) {
            Some(Some(body)) => Ok(body.clone()),
            Some(None) => Err(PlugdexError::Fetch {
                url: url.to_string(),
                message: "HTTP error status 503 Service Unavailable".to_string(),
            }),
            None => Err(PlugdexError::Fetch {
                url: url.to_string(),
                message: "request failed: connection refused".to_string(),
            }),
        }
    }
}
