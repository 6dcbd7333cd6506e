// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugdex list` command implementation.
//!
//! Prints the current view as terminal cards, or as JSON with `--json`.
//! Colors are used only when stdout is a TTY and `--plain` is not set.

use std::fmt::Write as _;
use std::io::IsTerminal;

use plugdex_config::PlugdexConfig;
use plugdex_core::{Fetcher, PlugdexError, PluginRecord, SortKey};
use plugdex_render::card::MAX_CARD_KEYWORDS;
use serde::Serialize;

use crate::data::load_catalog;

/// One entry of `--json` output.
#[derive(Debug, Serialize)]
pub struct PluginSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub version: &'a str,
    pub author: &'a str,
    pub description: &'a str,
    pub license: &'a str,
    pub keywords: &'a [String],
    pub min_host_version: &'a str,
    pub repository_url: Option<&'a str>,
}

impl<'a> PluginSummary<'a> {
    pub fn new(record: &'a PluginRecord, repository_url: Option<&'a str>) -> Self {
        let m = &record.manifest;
        Self {
            id: &record.id,
            name: &m.name,
            version: &m.version,
            author: &m.author.name,
            description: &m.description,
            license: &m.license,
            keywords: &m.keywords,
            min_host_version: &m.host_application.min_version,
            repository_url,
        }
    }
}

/// Run the `plugdex list` command.
pub async fn run_list(
    fetcher: &dyn Fetcher,
    config: &PlugdexConfig,
    search: Option<&str>,
    sort: Option<SortKey>,
    json: bool,
    plain: bool,
) -> Result<(), PlugdexError> {
    let loaded = load_catalog(fetcher, config, search, sort).await?;
    let catalog = &loaded.catalog;
    let view = catalog.view();

    if json {
        let summaries: Vec<PluginSummary<'_>> = view
            .iter()
            .map(|r| PluginSummary::new(r, loaded.index.repository_url(&r.id)))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();

    println!();
    println!("  plugdex list");
    println!("  {}", "-".repeat(35));
    println!(
        "    {} of {} plugins (sort: {})",
        view.len(),
        catalog.len(),
        catalog.sort()
    );
    println!();

    if view.is_empty() {
        println!("    No plugins match your search.");
        println!();
        return Ok(());
    }

    for record in view {
        print!(
            "{}",
            format_card(record, loaded.index.repository_url(&record.id), use_color)
        );
    }

    Ok(())
}

/// Format one record as a terminal card.
pub fn format_card(record: &PluginRecord, repository_url: Option<&str>, use_color: bool) -> String {
    let m = &record.manifest;
    let mut out = String::new();

    if use_color {
        use colored::Colorize;
        let _ = writeln!(
            out,
            "  {} {} {}",
            m.name.bold(),
            format!("v{}", m.version).cyan(),
            format!("({})", record.id).dimmed()
        );
    } else {
        let _ = writeln!(out, "  {} v{} ({})", m.name, m.version, record.id);
    }

    if !m.description.is_empty() {
        let _ = writeln!(out, "    {}", m.description);
    }
    let _ = writeln!(
        out,
        "    Author: {}  Compatible: {}+  License: {}",
        m.author.name, m.host_application.min_version, m.license
    );

    let keywords = keyword_line(&m.keywords);
    if !keywords.is_empty() {
        let _ = writeln!(out, "    Keywords: {keywords}");
    }
    if let Some(url) = repository_url {
        let _ = writeln!(out, "    Source: {url}");
    }
    out.push('\n');
    out
}

fn keyword_line(keywords: &[String]) -> String {
    let mut shown: Vec<String> = keywords.iter().take(MAX_CARD_KEYWORDS).cloned().collect();
    if keywords.len() > MAX_CARD_KEYWORDS {
        shown.push(format!("+{}", keywords.len() - MAX_CARD_KEYWORDS));
    }
    shown.join(", ")
}
