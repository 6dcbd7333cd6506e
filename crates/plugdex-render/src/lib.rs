// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Markup rendering for the plugin catalog.
//!
//! Fragments ([`card`], [`detail`]) are plain strings with every
//! interpolated value escaped. [`Page`] tracks what a browser page would
//! show (loading state, inserted card batches, empty state, error banner,
//! and at most one detail overlay), and [`site`] turns it into a
//! standalone `index.html`.

pub mod card;
pub mod detail;
pub mod escape;
pub mod overlay;
pub mod page;
pub mod site;

pub use card::{render_card, render_empty_state, render_error_banner};
pub use detail::render_detail;
pub use escape::escape_html;
pub use overlay::OverlaySlot;
pub use page::{CardBatch, DetailOverlay, Page};
pub use site::{render_site, write_site};
