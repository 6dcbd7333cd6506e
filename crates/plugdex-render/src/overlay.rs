// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-occupancy slot for the detail overlay.

/// Key name that dismisses an open overlay.
pub const ESCAPE_KEY: &str = "Escape";

/// Holds at most one open overlay.
///
/// Opening always closes the current occupant first, so two overlays can
/// never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlaySlot<T> {
    current: Option<T>,
}

impl<T> Default for OverlaySlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> OverlaySlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `overlay`, returning the one it replaced.
    pub fn open(&mut self, overlay: T) -> Option<T> {
        let previous = self.close();
        self.current = Some(overlay);
        previous
    }

    /// Close the open overlay, if any.
    pub fn close(&mut self) -> Option<T> {
        self.current.take()
    }

    /// Handle a key press. Returns true if it closed an overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == ESCAPE_KEY && self.close().is_some()
    }

    /// The open overlay.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Returns true if an overlay is open.
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
