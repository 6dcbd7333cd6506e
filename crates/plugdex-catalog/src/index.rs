// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin id to source repository lookup, built from the plugin-index list.

use std::collections::HashMap;

use plugdex_core::IndexEntry;

/// Maps plugin ids to their source repository URL.
///
/// Built once per load. An empty index is valid: cards simply render
/// without a source link.
#[derive(Debug, Clone, Default)]
pub struct RepositoryIndex {
    urls: HashMap<String, String>,
}

impl RepositoryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from index entries. Entries without a URL are skipped; the
    /// first entry for a repeated id wins.
    pub fn from_entries(entries: Vec<IndexEntry>) -> Self {
        let mut urls = HashMap::with_capacity(entries.len());
        for entry in entries {
            let Some(url) = entry.repository_url.filter(|u| !u.trim().is_empty()) else {
                continue;
            };
            urls.entry(entry.id).or_insert(url);
        }
        Self { urls }
    }

    /// Repository URL for `id`, if the index lists one.
    pub fn repository_url(&self, id: &str) -> Option<&str> {
        self.urls.get(id).map(String::as_str)
    }

    /// Number of ids with a known repository.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if no repository URLs are known.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, url: Option<&str>) -> IndexEntry {
        IndexEntry {
            id: id.to_string(),
            repository_url: url.map(str::to_string),
        }
    }

    #[test]
    fn looks_up_by_id() {
        let index = RepositoryIndex::from_entries(vec![
            entry("a", Some("https://github.com/x/a")),
            entry("b", Some("https://github.com/x/b")),
        ]);
        assert_eq!(index.repository_url("b"), Some("https://github.com/x/b"));
        assert_eq!(index.repository_url("missing"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn skips_entries_without_url() {
        let index = RepositoryIndex::from_entries(vec![entry("a", None), entry("b", Some("  "))]);
        assert!(index.is_empty());
    }

    #[test]
    fn first_duplicate_wins() {
        let index = RepositoryIndex::from_entries(vec![
            entry("a", Some("https://first")),
            entry("a", Some("https://second")),
        ]);
        assert_eq!(index.repository_url("a"), Some("https://first"));
    }
}
