// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog view state: the full record list plus the current search and sort.
//!
//! The view is always derived as `sort(filter(all, term), key)`, so a new
//! search keeps the chosen sort and a new sort applies to the current
//! search results.

use plugdex_core::{PluginRecord, SortKey};
use tracing::debug;

use crate::filter::filter_indices;
use crate::sort::sort_indices;

/// Loaded records and the visible subset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    all: Vec<PluginRecord>,
    term: String,
    sort: SortKey,
    /// Indices into `all`, in display order.
    view: Vec<usize>,
}

impl Catalog {
    /// Create a catalog showing every record in registry order.
    pub fn new(records: Vec<PluginRecord>) -> Self {
        let view = (0..records.len()).collect();
        Self {
            all: records,
            term: String::new(),
            sort: SortKey::Unsorted,
            view,
        }
    }

    /// Create a catalog with an initial sort applied.
    pub fn with_sort(records: Vec<PluginRecord>, sort: SortKey) -> Self {
        let mut catalog = Self::new(records);
        catalog.set_sort(sort);
        catalog
    }

    /// Replace the search term and recompute the view.
    pub fn set_search(&mut self, term: &str) {
        self.term = term.to_string();
        self.refresh();
    }

    /// Replace the sort key and recompute the view.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.refresh();
    }

    fn refresh(&mut self) {
        let mut view = filter_indices(&self.all, &self.term);
        sort_indices(&self.all, &mut view, self.sort);

        debug!(
            term = %self.term,
            sort = %self.sort,
            visible = view.len(),
            total = self.all.len(),
            "catalog view refreshed"
        );
        self.view = view;
    }

    /// Visible records in display order.
    pub fn view(&self) -> Vec<&PluginRecord> {
        self.view.iter().map(|&i| &self.all[i]).collect()
    }

    /// Visible record at display position `pos`.
    pub fn view_get(&self, pos: usize) -> Option<&PluginRecord> {
        self.view.get(pos).map(|&i| &self.all[i])
    }

    /// Every loaded record, in registry order.
    pub fn all(&self) -> &[PluginRecord] {
        &self.all
    }

    /// Look up a record by id in the full list, regardless of the current search.
    pub fn find(&self, id: &str) -> Option<&PluginRecord> {
        self.all.iter().find(|r| r.id == id)
    }

    /// Current search term, as entered.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Current sort key.
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Total number of loaded records.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// Returns true if no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Number of records in the current view.
    pub fn visible_len(&self) -> usize {
        self.view.len()
    }
}
