// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record ordering: locale-style text comparison and numeric version comparison.
//!
//! All sorts are stable, so applying the same key twice never moves a record.

use std::cmp::Ordering;

use plugdex_core::{PluginRecord, SortKey};

/// Compare two dot-separated version strings component by component.
///
/// Components compare as non-negative integers of any length; a component
/// that is empty or not a number counts as 0, and missing trailing
/// components count as 0, so `"1.0"` equals `"1.0.0"` and `"1.9.0"` is less
/// than `"1.10.0"`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_parts = version_components(a);
    let b_parts = version_components(b);

    for i in 0..a_parts.len().max(b_parts.len()) {
        let a_part = a_parts.get(i).copied().unwrap_or("");
        let b_part = b_parts.get(i).copied().unwrap_or("");
        match compare_digits(a_part, b_part) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

/// Each component as its significant digits; zero and non-numbers are `""`.
fn version_components(version: &str) -> Vec<&str> {
    version
        .split('.')
        .map(|part| {
            let part = part.trim();
            if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
                part.trim_start_matches('0')
            } else {
                ""
            }
        })
        .collect()
}

/// Numeric order of two digit strings without leading zeros.
fn compare_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Locale-style ordering for display strings.
///
/// Case-insensitive first; strings that differ only by case put the
/// lowercase form first ("apple" < "Apple" < "banana").
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    })
}

/// Compare two records under `key`.
///
/// `Version` orders newest first; `Unsorted` treats every pair as equal.
pub fn compare_records(a: &PluginRecord, b: &PluginRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => locale_cmp(&a.manifest.name, &b.manifest.name),
        SortKey::Version => compare_versions(&b.manifest.version, &a.manifest.version),
        SortKey::Author => locale_cmp(&a.manifest.author.name, &b.manifest.author.name),
        SortKey::Unsorted => Ordering::Equal,
    }
}

/// Stable in-place sort of a record view.
pub fn sort_records(records: &mut [&PluginRecord], key: SortKey) {
    if key == SortKey::Unsorted {
        return;
    }
    records.sort_by(|a, b| compare_records(a, b, key));
}

/// Stable in-place sort of positions into `records`.
pub fn sort_indices(records: &[PluginRecord], indices: &mut [usize], key: SortKey) {
    if key == SortKey::Unsorted {
        return;
    }
    indices.sort_by(|&a, &b| compare_records(&records[a], &records[b], key));
}
