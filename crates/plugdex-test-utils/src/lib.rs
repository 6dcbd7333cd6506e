// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for plugdex tests.
//!
//! Provides a scripted [`Fetcher`](plugdex_core::Fetcher) and record
//! fixtures so loader and rendering tests run without network access.
//!
//! # Components
//!
//! - [`MockFetcher`] - URL-keyed canned responses with request capture
//! - [`fixtures`] - sample records and their JSON documents

pub mod fixtures;
pub mod mock_fetcher;

pub use mock_fetcher::MockFetcher;
