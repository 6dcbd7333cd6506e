// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for plugdex.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use plugdex_core::SortKey;
use serde::{Deserialize, Serialize};

/// Primary host of the registry documents.
pub const PRIMARY_BASE: &str = "https://raw.githubusercontent.com/MaiM-with-u/plugin-repo/main";

/// CDN mirror of the same repository.
pub const MIRROR_BASE: &str = "https://cdn.jsdelivr.net/gh/MaiM-with-u/plugin-repo@main";

/// Top-level plugdex configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlugdexConfig {
    /// Where registry documents are fetched from.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Presentation settings for the site, terminal cards, and browser.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Candidate source URLs, tried in order.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// Plugin-details list (`plugin_details.json`), primary first.
    #[serde(default = "default_details_sources")]
    pub details: Vec<String>,

    /// Plugin-index list (`plugins.json`), used for repository links.
    #[serde(default = "default_index_sources")]
    pub index: Vec<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            details: default_details_sources(),
            index: default_index_sources(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_details_sources() -> Vec<String> {
    vec![
        format!("{PRIMARY_BASE}/plugin_details.json"),
        format!("{MIRROR_BASE}/plugin_details.json"),
    ]
}

fn default_index_sources() -> Vec<String> {
    vec![
        format!("{PRIMARY_BASE}/plugins.json"),
        format!("{MIRROR_BASE}/plugins.json"),
    ]
}

fn default_timeout_secs() -> u64 {
    15
}

/// Presentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Cards inserted per batch when building the page.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Idle window before a search keystroke triggers filtering.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Sort applied before the user picks one.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Theme name written into the generated page (`data-theme`).
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Output directory for `plugdex build`.
    #[serde(default = "default_site_dir")]
    pub site_dir: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            debounce_ms: default_debounce_ms(),
            default_sort: SortKey::default(),
            theme: default_theme(),
            site_dir: default_site_dir(),
        }
    }
}

fn default_batch_size() -> usize {
    6
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_site_dir() -> String {
    "site".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
