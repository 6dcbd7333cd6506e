// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of the registry's JSON documents.
//!
//! The plugin-details list must be a JSON array; its entries are decoded
//! one at a time. Entries that do not decode, or that lack an id or name,
//! are dropped with a warning, and repeated ids keep only their first
//! occurrence.

use std::collections::HashSet;

use plugdex_core::{IndexEntry, PlugdexError, PluginRecord};
use serde_json::Value;
use tracing::warn;

use crate::index::RepositoryIndex;

/// Parse the plugin-details list (`plugin_details.json`).
pub fn parse_registry(json: &str) -> Result<Vec<PluginRecord>, PlugdexError> {
    let raw: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| PlugdexError::Internal(format!("invalid plugin registry: {e}")))?;
    Ok(sanitize_records(raw))
}

/// Parse the plugin-index list (`plugins.json`) into a repository lookup.
pub fn parse_index(json: &str) -> Result<RepositoryIndex, PlugdexError> {
    let entries: Vec<IndexEntry> = serde_json::from_str(json)
        .map_err(|e| PlugdexError::Internal(format!("invalid plugin index: {e}")))?;
    Ok(RepositoryIndex::from_entries(entries))
}

/// Decode raw entries, dropping unusable ones and duplicate ids, keeping registry order.
pub fn sanitize_records(entries: Vec<Value>) -> Vec<PluginRecord> {
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(entries.len());

    for (position, entry) in entries.into_iter().enumerate() {
        let record: PluginRecord = match serde_json::from_value(entry) {
            Ok(record) => record,
            Err(e) => {
                warn!(position, error = %e, "skipping malformed registry entry");
                continue;
            }
        };
        if record.id.trim().is_empty() || record.manifest.name.trim().is_empty() {
            warn!(id = %record.id, "skipping registry entry without id or name");
            continue;
        }
        if !seen.insert(record.id.clone()) {
            warn!(id = %record.id, "skipping duplicate registry entry");
            continue;
        }
        kept.push(record);
    }

    kept
}
