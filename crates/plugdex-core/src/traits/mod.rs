// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams for swappable backends.

pub mod fetch;

pub use fetch::Fetcher;
