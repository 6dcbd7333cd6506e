// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trailing-edge debounce for search input.

use std::time::{Duration, Instant};

/// Default quiet period before a search runs.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Coalesces a burst of input events into one trigger.
///
/// Each [`input`](Self::input) restarts the window. [`poll`](Self::poll)
/// fires once, after the window has passed since the most recent input.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_input: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_input: None,
        }
    }

    /// Record an input event at `now`.
    pub fn input(&mut self, now: Instant) {
        self.last_input = Some(now);
    }

    /// Returns true exactly once per burst, when the window has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_input {
            Some(at) if now.saturating_duration_since(at) >= self.window => {
                self.last_input = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true if an input is waiting for its window to pass.
    pub fn is_pending(&self) -> bool {
        self.last_input.is_some()
    }
}
