// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standalone `index.html` generation.
//!
//! The document needs no script: every record gets a detail section that is
//! hidden until its `#plugin-<id>` anchor becomes the document target, and a
//! document has at most one target.

use std::fs;
use std::path::{Path, PathBuf};

use plugdex_core::{PlugdexError, PluginRecord};
use tracing::info;

use crate::detail::render_detail;
use crate::escape::escape_html;
use crate::page::Page;

/// File name written by [`write_site`].
pub const SITE_INDEX: &str = "index.html";

const STYLE: &str = r#"
      .plugin-detail { display: none; }
      .plugin-detail:target, .plugin-detail.modal-open { display: flex; pointer-events: auto; opacity: 1; visibility: visible; }
      .plugin-card { animation: card-in 0.4s ease-out both; }
      @keyframes card-in { from { opacity: 0; transform: translateY(12px); } to { opacity: 1; transform: none; } }
"#;

/// Render the complete document for `page`.
///
/// `records` supplies the detail sections, one per record. If the page has
/// an open overlay, that record's section is emitted in its open form.
pub fn render_site(page: &Page, records: &[PluginRecord], theme: &str) -> String {
    let open = page.overlay();
    let details: String = records
        .iter()
        .map(|record| match open {
            Some(overlay) if overlay.plugin_id == record.id => overlay.markup.clone(),
            _ => render_detail(record),
        })
        .collect();

    let status = if page.is_loading() {
        r#"<span class="loading loading-spinner" aria-label="Loading"></span>"#.to_string()
    } else {
        format!(
            r#"<span class="plugin-count badge badge-neutral">{} plugins</span>"#,
            page.plugin_count()
        )
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Plugin Market</title>
    <link href="https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css" rel="stylesheet">
    <script src="https://cdn.tailwindcss.com"></script>
    <style>{STYLE}    </style>
  </head>
  <body class="min-h-screen bg-base-200">
    <header class="navbar bg-base-100 shadow-sm px-6">
      <h1 class="text-xl font-bold flex-1">Plugin Market</h1>
      {status}
    </header>
    <main id="plugin-grid" class="grid gap-4 p-6 sm:grid-cols-2 lg:grid-cols-3">
{grid}    </main>
{details}  </body>
</html>
"##,
        theme = escape_html(theme),
        grid = page.grid_markup(),
    )
}

/// Write `html` to `dir/index.html`, creating `dir` if needed.
pub fn write_site(dir: &Path, html: &str) -> Result<PathBuf, PlugdexError> {
    fs::create_dir_all(dir).map_err(|e| PlugdexError::Render {
        source: Box::new(e),
    })?;

    let path = dir.join(SITE_INDEX);
    fs::write(&path, html).map_err(|e| PlugdexError::Render {
        source: Box::new(e),
    })?;

    info!(path = %path.display(), bytes = html.len(), "site written");
    Ok(path)
}
