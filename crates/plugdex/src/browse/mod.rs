// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive terminal browser.
//!
//! Layout:
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ Search: [____________________]                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │ Hello World      v1.9.0   Grace     demo                    │
//! │ Weather Report   v1.10.0  Ada       api, daily, forecast +1 │
//! │                                                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │ 2 of 4 │ Sort: name │ Tab: sort │ Enter: details │ Esc: quit│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Enter opens a detail popup over the list; opening another replaces it.

mod app;
pub mod debounce;
mod ui;

pub use app::run;
