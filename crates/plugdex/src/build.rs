// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `plugdex build` command implementation.
//!
//! Writes the catalog as a standalone `index.html`. When the registry
//! cannot be loaded at all, the page is still written with the error banner
//! in place of the grid, and the load error is returned.

use std::path::{Path, PathBuf};

use plugdex_config::PlugdexConfig;
use plugdex_core::{Fetcher, PlugdexError, SortKey};
use plugdex_render::{render_site, write_site, Page};
use tracing::{error, info};

use crate::data::load_catalog;

/// Run the `plugdex build` command. Returns the path written.
pub async fn run_build(
    fetcher: &dyn Fetcher,
    config: &PlugdexConfig,
    out: &Path,
    search: Option<&str>,
    sort: Option<SortKey>,
) -> Result<PathBuf, PlugdexError> {
    let display = &config.display;
    let mut page = Page::new(display.batch_size);

    match load_catalog(fetcher, config, search, sort).await {
        Ok(loaded) => {
            let catalog = &loaded.catalog;
            page.finish_loading(catalog.len());
            page.show_records(&catalog.view(), &loaded.index);

            let html = render_site(&page, catalog.all(), &display.theme);
            let path = write_site(out, &html)?;
            info!(
                source = %loaded.source_url,
                visible = catalog.visible_len(),
                total = catalog.len(),
                "site built"
            );
            Ok(path)
        }
        Err(e) => {
            error!(error = %e, "failed to load plugins, writing error page");
            page.show_error(&e.to_string());
            write_site(out, &render_site(&page, &[], &display.theme))?;
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{config, fetcher, DETAILS};
    use plugdex_test_utils::MockFetcher;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn writes_index_with_all_cards() {
        let tmp = tempfile::tempdir().unwrap();
        let path = run_build(&fetcher(), &config(), tmp.path(), None, None).await.unwrap();

        let html = std::fs::read_to_string(path).unwrap();
        assert_eq!(html.matches("data-plugin-id=").count(), 4);
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("https://github.com/example/weather"));
    }

    #[tokio::test]
    async fn search_narrows_grid_but_keeps_every_detail() {
        let tmp = tempfile::tempdir().unwrap();
        let path = run_build(&fetcher(), &config(), tmp.path(), Some("dice"), None)
            .await
            .unwrap();

        let html = std::fs::read_to_string(path).unwrap();
        assert_eq!(html.matches("data-plugin-id=").count(), 1);
        assert!(html.contains(r#"id="plugin-memo""#));
    }

    #[tokio::test]
    #[traced_test]
    async fn total_failure_writes_error_page_and_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let fetcher = MockFetcher::new().with_failure(DETAILS);

        let err = run_build(&fetcher, &config(), tmp.path(), None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, PlugdexError::DataUnavailable { .. }));

        let html = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(html.contains("alert-error"));
        assert!(html.contains("plugin data unavailable"));
        assert!(logs_contain("writing error page"));
    }
}
