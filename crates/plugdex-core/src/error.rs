// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for plugdex.

use thiserror::Error;

/// The primary error type used across the loader, catalog, and renderer.
#[derive(Debug, Error)]
pub enum PlugdexError {
    /// Configuration errors (invalid values, unusable source lists).
    #[error("configuration error: {0}")]
    Config(String),

    /// A single source failed (network error, non-success status, or bad JSON).
    ///
    /// The loader logs these and moves on to the next candidate.
    #[error("fetch from {url} failed: {message}")]
    Fetch { url: String, message: String },

    /// Every candidate source failed. This is the one failure users see.
    #[error(
        "plugin data unavailable: all {attempted} source(s) failed, check your network or try again later"
    )]
    DataUnavailable { attempted: usize },

    /// No loaded record carries the requested id.
    #[error("plugin not found: {id}")]
    NotFound { id: String },

    /// Writing rendered output failed.
    #[error("render error: {source}")]
    Render {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
