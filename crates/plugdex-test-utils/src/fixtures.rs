// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample registry records and the JSON documents that carry them.

use plugdex_core::{Author, HostApplication, IndexEntry, Manifest, PluginRecord};

/// Build a record with the fields tests usually care about.
pub fn record(id: &str, name: &str, version: &str, author: &str, keywords: &[&str]) -> PluginRecord {
    PluginRecord {
        id: id.to_string(),
        manifest: Manifest {
            name: name.to_string(),
            description: format!("{name} for your bot"),
            version: version.to_string(),
            author: Author {
                name: author.to_string(),
                url: format!("https://github.com/{}", author.to_lowercase()),
            },
            license: "MIT".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            host_application: HostApplication {
                min_version: "0.8.0".to_string(),
                max_version: None,
            },
            manifest_version: "1".to_string(),
        },
    }
}

/// Four records covering keyword overflow, an upper host bound, and
/// versions that sort differently as text and as numbers.
pub fn sample_records() -> Vec<PluginRecord> {
    let mut weather = record("weather", "Weather Report", "1.10.0", "Ada", &["api", "daily", "forecast", "city"]);
    weather.manifest.host_application.max_version = Some("0.9.9".to_string());

    vec![
        record("hello-world", "Hello World", "1.9.0", "Grace", &["demo"]),
        weather,
        record("dice", "Dice Roller", "0.3.1", "linus", &["game", "fun"]),
        record("memo", "Memo", "2.0", "Barbara", &[]),
    ]
}

/// `plugin_details.json` body for [`sample_records`].
pub fn registry_json() -> String {
    serde_json::to_string(&sample_records()).unwrap_or_else(|_| "[]".to_string())
}

/// `plugins.json` body listing repositories for two of the sample records.
pub fn index_json() -> String {
    let entries = vec![
        IndexEntry {
            id: "hello-world".to_string(),
            repository_url: Some("https://github.com/example/hello-world".to_string()),
        },
        IndexEntry {
            id: "weather".to_string(),
            repository_url: Some("https://github.com/example/weather".to_string()),
        },
        IndexEntry {
            id: "dice".to_string(),
            repository_url: None,
        },
    ];
    serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
}
