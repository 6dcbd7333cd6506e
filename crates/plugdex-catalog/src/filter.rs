// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Case-insensitive substring search over plugin records.

use plugdex_core::PluginRecord;

/// Normalize a raw search term. Returns `None` when the term is blank.
pub fn normalize_term(term: &str) -> Option<String> {
    let needle = term.trim().to_lowercase();
    (!needle.is_empty()).then_some(needle)
}

/// Whether `record` matches an already-normalized (trimmed, lowercased) needle.
///
/// Matches on name, description, author name, or any keyword.
pub fn matches_term(record: &PluginRecord, needle: &str) -> bool {
    let manifest = &record.manifest;
    manifest.name.to_lowercase().contains(needle)
        || manifest.description.to_lowercase().contains(needle)
        || manifest.author.name.to_lowercase().contains(needle)
        || manifest
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
}

/// Filter records by search term, preserving original order.
///
/// A blank term returns every record.
pub fn filter_records<'a>(records: &'a [PluginRecord], term: &str) -> Vec<&'a PluginRecord> {
    filter_indices(records, term)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Positions in `records` of the entries matching `term`, ascending.
pub fn filter_indices(records: &[PluginRecord], term: &str) -> Vec<usize> {
    match normalize_term(term) {
        None => (0..records.len()).collect(),
        Some(needle) => (0..records.len())
            .filter(|&i| matches_term(&records[i], &needle))
            .collect(),
    }
}
