// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page state: what a browser would be showing at any moment.

use plugdex_catalog::RepositoryIndex;
use plugdex_core::PluginRecord;
use tracing::debug;

use crate::card::{render_card, render_empty_state, render_error_banner};
use crate::detail::render_open_detail;
use crate::overlay::OverlaySlot;

/// Cards inserted into the grid per batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 6;

/// Seconds of entrance-animation delay per grid position.
const ANIMATION_STEP_SECS: f64 = 0.1;

/// A group of cards inserted into the grid together.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBatch {
    /// Grid position of the first card in the batch.
    pub start: usize,
    pub cards: Vec<String>,
}

/// The open detail overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailOverlay {
    pub plugin_id: String,
    pub markup: String,
}

#[derive(Debug, Clone)]
pub struct Page {
    loading: bool,
    plugin_count: usize,
    batch_size: usize,
    grid: Vec<CardBatch>,
    empty_state_visible: bool,
    error: Option<String>,
    overlay: OverlaySlot<DetailOverlay>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl Page {
    /// A page in its initial loading state. A `batch_size` of 0 is treated as 1.
    pub fn new(batch_size: usize) -> Self {
        Self {
            loading: true,
            plugin_count: 0,
            batch_size: batch_size.max(1),
            grid: Vec::new(),
            empty_state_visible: false,
            error: None,
            overlay: OverlaySlot::new(),
        }
    }

    /// Data arrived: hide the loading indicator and record the total count.
    pub fn finish_loading(&mut self, plugin_count: usize) {
        self.loading = false;
        self.plugin_count = plugin_count;
        self.error = None;
    }

    /// Replace the grid with cards for `records`, in order.
    ///
    /// An empty slice shows the empty-state placeholder instead.
    pub fn show_records(&mut self, records: &[&PluginRecord], index: &RepositoryIndex) {
        self.grid.clear();
        self.error = None;
        self.empty_state_visible = records.is_empty();

        for (batch_no, chunk) in records.chunks(self.batch_size).enumerate() {
            let start = batch_no * self.batch_size;
            let cards = chunk
                .iter()
                .enumerate()
                .map(|(offset, record)| {
                    let card = render_card(record, index.repository_url(&record.id));
                    with_animation_delay(&card, start + offset)
                })
                .collect();
            self.grid.push(CardBatch { start, cards });
        }

        debug!(
            cards = records.len(),
            batches = self.grid.len(),
            "grid updated"
        );
    }

    /// Replace the grid with the error banner.
    pub fn show_error(&mut self, message: &str) {
        self.loading = false;
        self.grid.clear();
        self.empty_state_visible = false;
        self.error = Some(message.to_string());
    }

    /// Open the detail overlay for `record`, closing any open one first.
    pub fn open_detail(&mut self, record: &PluginRecord) {
        let replaced = self.overlay.open(DetailOverlay {
            plugin_id: record.id.clone(),
            markup: render_open_detail(record),
        });
        if let Some(previous) = replaced {
            debug!(closed = %previous.plugin_id, opened = %record.id, "detail overlay replaced");
        }
    }

    /// Close the detail overlay.
    pub fn close_detail(&mut self) {
        self.overlay.close();
    }

    /// A click on the overlay backdrop closes it.
    pub fn click_backdrop(&mut self) {
        self.close_detail();
    }

    /// Returns true if `key` closed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.overlay.handle_key(key)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn plugin_count(&self) -> usize {
        self.plugin_count
    }

    pub fn batches(&self) -> &[CardBatch] {
        &self.grid
    }

    /// Every card currently in the grid, in position order.
    pub fn cards(&self) -> impl Iterator<Item = &str> {
        self.grid.iter().flat_map(|b| b.cards.iter().map(String::as_str))
    }

    pub fn is_empty_state_visible(&self) -> bool {
        self.empty_state_visible
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn overlay(&self) -> Option<&DetailOverlay> {
        self.overlay.current()
    }

    /// Markup for the grid area: the error banner, the empty state, or the cards.
    pub fn grid_markup(&self) -> String {
        if let Some(message) = &self.error {
            return render_error_banner(message);
        }
        if self.empty_state_visible {
            return render_empty_state();
        }
        self.cards().collect()
    }
}

fn with_animation_delay(card: &str, position: usize) -> String {
    let delay = ANIMATION_STEP_SECS * position as f64;
    card.replacen(
        "<article ",
        &format!(r#"<article style="animation-delay: {delay:.1}s" "#),
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugdex_catalog::{parse_index, Catalog};
    use plugdex_test_utils::fixtures::{self, record};

    fn many(n: usize) -> Vec<PluginRecord> {
        (0..n)
            .map(|i| record(&format!("p{i}"), &format!("Plugin {i}"), "1.0.0", "a", &[]))
            .collect()
    }

    #[test]
    fn starts_loading() {
        let page = Page::default();
        assert!(page.is_loading());
        assert_eq!(page.plugin_count(), 0);
        assert!(page.overlay().is_none());
    }

    #[test]
    fn cards_inserted_in_batches() {
        let records = many(14);
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let mut page = Page::new(6);
        page.show_records(&refs, &RepositoryIndex::new());

        let sizes: Vec<usize> = page.batches().iter().map(|b| b.cards.len()).collect();
        assert_eq!(sizes, vec![6, 6, 2]);
        assert_eq!(page.batches()[2].start, 12);
        assert_eq!(page.cards().count(), 14);
    }

    #[test]
    fn cards_carry_positional_animation_delay() {
        let records = many(8);
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let mut page = Page::new(6);
        page.show_records(&refs, &RepositoryIndex::new());

        let cards: Vec<&str> = page.cards().collect();
        assert!(cards[0].contains("animation-delay: 0.0s"));
        assert!(cards[3].contains("animation-delay: 0.3s"));
        assert!(cards[7].contains("animation-delay: 0.7s"));
    }

    #[test]
    fn empty_view_shows_placeholder() {
        let mut page = Page::default();
        page.show_records(&[], &RepositoryIndex::new());
        assert!(page.is_empty_state_visible());
        assert!(page.batches().is_empty());
        assert!(page.grid_markup().contains("No plugins match"));
    }

    #[test]
    fn show_records_clears_previous_grid() {
        let records = many(3);
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let mut page = Page::default();
        page.show_records(&refs, &RepositoryIndex::new());
        page.show_records(&refs[..1], &RepositoryIndex::new());
        assert_eq!(page.cards().count(), 1);
    }

    #[test]
    fn source_links_come_from_index() {
        let records = fixtures::sample_records();
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let index = parse_index(&fixtures::index_json()).unwrap();
        let mut page = Page::default();
        page.show_records(&refs, &index);

        let cards: Vec<&str> = page.cards().collect();
        assert!(cards[0].contains("https://github.com/example/hello-world"));
        assert!(!cards[2].contains(">Source</a>"));
    }

    #[test]
    fn error_replaces_grid() {
        let records = many(2);
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let mut page = Page::default();
        page.show_records(&refs, &RepositoryIndex::new());
        page.show_error("plugin data unavailable");

        assert!(!page.is_loading());
        assert!(page.batches().is_empty());
        assert_eq!(page.error(), Some("plugin data unavailable"));
        assert!(page.grid_markup().contains("alert-error"));
    }

    #[test]
    fn opening_second_detail_replaces_first() {
        let catalog = Catalog::new(fixtures::sample_records());
        let mut page = Page::default();

        page.open_detail(catalog.find("dice").unwrap());
        page.open_detail(catalog.find("memo").unwrap());

        let open = page.overlay().unwrap();
        assert_eq!(open.plugin_id, "memo");
        assert!(open.markup.contains("modal-open"));
    }

    #[test]
    fn overlay_closes_via_button_backdrop_and_escape() {
        let record = &fixtures::sample_records()[0];
        let mut page = Page::default();

        page.open_detail(record);
        page.close_detail();
        assert!(page.overlay().is_none());

        page.open_detail(record);
        page.click_backdrop();
        assert!(page.overlay().is_none());

        page.open_detail(record);
        assert!(!page.handle_key("a"));
        assert!(page.handle_key("Escape"));
        assert!(page.overlay().is_none());
    }

    #[test]
    fn zero_batch_size_still_renders() {
        let records = many(2);
        let refs: Vec<&PluginRecord> = records.iter().collect();
        let mut page = Page::new(0);
        page.show_records(&refs, &RepositoryIndex::new());
        assert_eq!(page.batches().len(), 2);
    }
}
