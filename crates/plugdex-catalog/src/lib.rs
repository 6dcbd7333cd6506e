// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry parsing, search, and ordering.
//!
//! Everything here is synchronous and pure apart from logging: the loader
//! hands over raw JSON, [`registry`] turns it into records, and [`Catalog`]
//! keeps the full list alongside the filtered and sorted view of it.

pub mod catalog;
pub mod filter;
pub mod index;
pub mod registry;
pub mod sort;

pub use catalog::Catalog;
pub use filter::{filter_indices, filter_records, matches_term};
pub use index::RepositoryIndex;
pub use registry::{parse_index, parse_registry};
pub use sort::{compare_records, compare_versions, sort_indices, sort_records};
