// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for plugdex.
//!
//! Holds the registry data model shared by every crate in the workspace,
//! the single error type, and the [`Fetcher`] seam that the loader is
//! written against.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PlugdexError;
pub use traits::Fetcher;
pub use types::{Author, HostApplication, IndexEntry, Manifest, PluginRecord, SortKey};
