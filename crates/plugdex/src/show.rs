// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugdex show` command implementation.

use std::fmt::Write as _;

use plugdex_config::PlugdexConfig;
use plugdex_core::{Fetcher, PlugdexError, PluginRecord};
use serde::Serialize;

use crate::data::load_catalog;

#[derive(Debug, Serialize)]
struct DetailResponse<'a> {
    #[serde(flatten)]
    record: &'a PluginRecord,
    repository_url: Option<&'a str>,
}

/// Run the `plugdex show` command.
///
/// The id is looked up in the full registry. An unknown id is
/// `PlugdexError::NotFound`.
pub async fn run_show(
    fetcher: &dyn Fetcher,
    config: &PlugdexConfig,
    id: &str,
    json: bool,
) -> Result<(), PlugdexError> {
    let loaded = load_catalog(fetcher, config, None, None).await?;
    let record = loaded
        .catalog
        .find(id)
        .ok_or_else(|| PlugdexError::NotFound { id: id.to_string() })?;
    let repository_url = loaded.index.repository_url(id);

    if json {
        let response = DetailResponse {
            record,
            repository_url,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print!("{}", format_detail(record, repository_url));
    }
    Ok(())
}

/// Format every field of `record` for the terminal.
pub fn format_detail(record: &PluginRecord, repository_url: Option<&str>) -> String {
    let m = &record.manifest;
    let host = &m.host_application;
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", m.name);
    let _ = writeln!(out, "  {}", "-".repeat(35));
    let _ = writeln!(out, "    Id:               {}", record.id);
    let _ = writeln!(out, "    Version:          {}", m.version);
    let _ = writeln!(out, "    Manifest version: {}", m.manifest_version);
    let _ = writeln!(out, "    Description:      {}", m.description);
    if m.author.url.is_empty() {
        let _ = writeln!(out, "    Author:           {}", m.author.name);
    } else {
        let _ = writeln!(out, "    Author:           {} <{}>", m.author.name, m.author.url);
    }
    match &host.max_version {
        Some(max) => {
            let _ = writeln!(out, "    Compatibility:    {} - {}", host.min_version, max);
        }
        None => {
            let _ = writeln!(out, "    Compatibility:    {}+", host.min_version);
        }
    }
    let _ = writeln!(out, "    License:          {}", m.license);
    if !m.keywords.is_empty() {
        let _ = writeln!(out, "    Keywords:         {}", m.keywords.join(", "));
    }
    if let Some(url) = repository_url {
        let _ = writeln!(out, "    Source:           {url}");
    }
    let _ = writeln!(out);
    out
}
