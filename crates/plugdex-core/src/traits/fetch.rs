// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fetcher trait for retrieving raw registry documents.

use async_trait::async_trait;

use crate::error::PlugdexError;

/// Retrieves the body of a registry document by URL.
///
/// Implementations must return `PlugdexError::Fetch` for network failures
/// and non-success statuses so the loader can fall through to the next
/// candidate source.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return the response body as text.
    async fn get_text(&self, url: &str) -> Result<String, PlugdexError>;
}
