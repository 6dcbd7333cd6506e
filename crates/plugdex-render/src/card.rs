// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grid fragments: plugin cards, the empty-state placeholder, and the error banner.

use plugdex_core::PluginRecord;

use crate::escape::{anchor_id, escape_html};

/// Keyword badges shown on a card before collapsing the rest into `+N`.
pub const MAX_CARD_KEYWORDS: usize = 3;

/// Render one plugin card.
///
/// The "Source" link is only emitted when `repository_url` is present. The
/// "Details" link targets the record's overlay anchor.
pub fn render_card(record: &PluginRecord, repository_url: Option<&str>) -> String {
    let manifest = &record.manifest;

    let mut badges: String = manifest
        .keywords
        .iter()
        .take(MAX_CARD_KEYWORDS)
        .map(|k| format!(r#"<span class="badge badge-outline badge-sm">{}</span>"#, escape_html(k)))
        .collect();
    if manifest.keywords.len() > MAX_CARD_KEYWORDS {
        badges.push_str(&format!(
            r#"<span class="badge badge-ghost badge-sm">+{}</span>"#,
            manifest.keywords.len() - MAX_CARD_KEYWORDS
        ));
    }

    let source = repository_url
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener" class="btn btn-sm btn-outline">Source</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<article class="card plugin-card bg-base-100 shadow-sm" data-plugin-id="{id}">
  <div class="card-body">
    <div class="flex items-start justify-between gap-2">
      <h2 class="card-title">{name}</h2>
      <span class="badge badge-primary">v{version}</span>
    </div>
    <p class="description">{description}</p>
    <dl class="meta text-sm">
      <dt>Author</dt><dd>{author}</dd>
      <dt>Compatible</dt><dd>{min_version}+</dd>
      <dt>License</dt><dd>{license}</dd>
    </dl>
    <div class="keywords flex flex-wrap gap-1">{badges}</div>
    <div class="card-actions justify-end">{source}<a href="#{anchor}" class="btn btn-sm btn-primary">Details</a></div>
  </div>
</article>
"##,
        id = escape_html(&record.id),
        name = escape_html(&manifest.name),
        version = escape_html(&manifest.version),
        description = escape_html(&manifest.description),
        author = escape_html(&manifest.author.name),
        min_version = escape_html(&manifest.host_application.min_version),
        license = escape_html(&manifest.license),
        anchor = anchor_id(&record.id),
    )
}

/// Placeholder shown in place of the grid when no record matches.
pub fn render_empty_state() -> String {
    r#"<div class="empty-state text-center py-16">
  <p class="text-lg">No plugins match your search.</p>
  <p class="text-sm opacity-70">Try a different keyword.</p>
</div>
"#
    .to_string()
}

/// Banner shown in place of the grid when plugin data could not be loaded.
pub fn render_error_banner(message: &str) -> String {
    format!(
        r#"<div role="alert" class="alert alert-error">
  <span>Failed to load plugins: {}</span>
  <span class="text-sm">Check your network connection and try again later.</span>
</div>
"#,
        escape_html(message)
    )
}
