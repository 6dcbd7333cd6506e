// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry loading with ordered fallback.
//!
//! [`HttpFetcher`] performs plain HTTP GETs; [`loader`] walks a list of
//! candidate sources in order and keeps the first one that answers with a
//! document that decodes.

pub mod client;
pub mod loader;

pub use client::HttpFetcher;
pub use loader::{load_first, load_plugins, load_repository_index, Loaded};
