// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Detail overlay fragment for a single plugin.

use plugdex_core::PluginRecord;

use crate::escape::{anchor_id, escape_html, title_id};

/// Render the detail overlay for `record`, closed.
///
/// The overlay becomes visible when its anchor is the document target. The
/// close button and the backdrop both link to `#`, which clears the target.
pub fn render_detail(record: &PluginRecord) -> String {
    detail_markup(record, false)
}

/// Render the detail overlay for `record` with the open class applied.
pub(crate) fn render_open_detail(record: &PluginRecord) -> String {
    detail_markup(record, true)
}

fn detail_markup(record: &PluginRecord, open: bool) -> String {
    let manifest = &record.manifest;
    let host = &manifest.host_application;

    let author = if manifest.author.url.is_empty() {
        escape_html(&manifest.author.name)
    } else {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="link">{}</a>"#,
            escape_html(&manifest.author.url),
            escape_html(&manifest.author.name)
        )
    };

    let compatibility = match &host.max_version {
        Some(max) => format!("{} - {}", escape_html(&host.min_version), escape_html(max)),
        None => format!("{}+", escape_html(&host.min_version)),
    };

    let keywords: String = manifest
        .keywords
        .iter()
        .map(|k| format!(r#"<span class="badge badge-outline">{}</span>"#, escape_html(k)))
        .collect();

    format!(
        r##"<section id="{anchor}" class="modal plugin-detail{open_class}" role="dialog" aria-labelledby="{title}">
  <div class="modal-box">
    <a href="#" class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2" aria-label="Close">&#10005;</a>
    <h3 id="{title}" class="font-bold text-lg">{name}</h3>
    <dl class="detail-fields">
      <dt>Version</dt><dd>{version}</dd>
      <dt>Manifest version</dt><dd>{manifest_version}</dd>
      <dt>Description</dt><dd>{description}</dd>
      <dt>Author</dt><dd>{author}</dd>
      <dt>Compatibility</dt><dd>{compatibility}</dd>
      <dt>License</dt><dd>{license}</dd>
    </dl>
    <div class="keywords flex flex-wrap gap-1">{keywords}</div>
  </div>
  <a href="#" class="modal-backdrop" aria-label="Close">close</a>
</section>
"##,
        anchor = anchor_id(&record.id),
        title = title_id(&record.id),
        open_class = if open { " modal-open" } else { "" },
        name = escape_html(&manifest.name),
        version = escape_html(&manifest.version),
        manifest_version = escape_html(&manifest.manifest_version),
        description = escape_html(&manifest.description),
        license = escape_html(&manifest.license),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugdex_test_utils::fixtures::{record, sample_records};

    #[test]
    fn detail_lists_every_keyword() {
        let weather = &sample_records()[1];
        let html = render_detail(weather);
        for k in ["api", "daily", "forecast", "city"] {
            assert!(html.contains(&format!(">{k}</span>")), "missing keyword {k}");
        }
    }

    #[test]
    fn compatibility_shows_range_when_max_present() {
        let weather = &sample_records()[1];
        assert!(render_detail(weather).contains("<dd>0.8.0 - 0.9.9</dd>"));

        let hello = &sample_records()[0];
        assert!(render_detail(hello).contains("<dd>0.8.0+</dd>"));
    }

    #[test]
    fn author_linked_only_with_url() {
        let mut r = record("x", "X", "1.0.0", "Ada", &[]);
        assert!(render_detail(&r).contains(r#"href="https://github.com/ada""#));

        r.manifest.author.url.clear();
        let html = render_detail(&r);
        assert!(html.contains("<dd>Ada</dd>"));
        assert!(!html.contains("github.com/ada"));
    }

    #[test]
    fn has_anchor_close_and_backdrop() {
        let r = record("dice", "Dice Roller", "0.3.1", "linus", &[]);
        let html = render_detail(&r);
        assert!(html.contains(r#"id="plugin-dice""#));
        assert!(html.contains("modal-backdrop"));
        assert!(html.contains(r#"aria-label="Close""#));
        assert!(html.contains("<dd>1</dd>"));
        assert!(!html.contains("modal-open"));
    }

    #[test]
    fn open_variant_carries_open_class() {
        let r = record("dice", "Dice Roller", "0.3.1", "linus", &[]);
        assert!(render_open_detail(&r).contains("modal plugin-detail modal-open"));
    }

    #[test]
    fn description_is_escaped() {
        let mut r = record("x", "X", "1.0.0", "a", &[]);
        r.manifest.description = "<img src=x onerror=alert(1)>".to_string();
        assert!(render_detail(&r).contains("&lt;img src=x onerror=alert(1)&gt;"));
    }
}
