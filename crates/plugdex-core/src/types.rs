// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry data model.
//!
//! Field names follow the registry's JSON documents (`plugin_details.json`
//! and `plugins.json`). Records are immutable once loaded.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One entry of the plugin-details list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    /// Registry-wide unique plugin id.
    pub id: String,
    /// Metadata describing the plugin.
    pub manifest: Manifest,
}

/// Metadata describing one plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Dot-separated numeric version string (e.g. "1.10.0").
    pub version: String,
    pub author: Author,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub host_application: HostApplication,
    /// Manifest schema version. Registries publish this as either a number or a string.
    #[serde(deserialize_with = "string_or_number")]
    pub manifest_version: String,
}

/// Plugin author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Host application versions the plugin is compatible with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostApplication {
    pub min_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
}

/// One entry of the plugin-index list, used to resolve source repository links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub id: String,
    #[serde(default)]
    pub repository_url: Option<String>,
}

/// Ordering applied to the visible list of records.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep registry order.
    #[default]
    Unsorted,
    /// Plugin name, ascending.
    Name,
    /// Plugin version, newest first.
    Version,
    /// Author name, ascending.
    Author,
}

impl SortKey {
    /// Parse a user-supplied sort parameter. Unknown values mean "no reordering".
    pub fn from_param(param: &str) -> Self {
        param.trim().to_lowercase().parse().unwrap_or(SortKey::Unsorted)
    }

    /// The key after this one, wrapping around. Used to cycle keys interactively.
    pub fn next(self) -> Self {
        match self {
            SortKey::Unsorted => SortKey::Name,
            SortKey::Name => SortKey::Version,
            SortKey::Version => SortKey::Author,
            SortKey::Author => SortKey::Unsorted,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
