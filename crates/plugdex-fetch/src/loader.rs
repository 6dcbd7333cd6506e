// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered-fallback loading of registry documents.
//!
//! Sources are tried one at a time, in the order given. The first source
//! whose response both arrives and decodes wins; every earlier failure is
//! logged and skipped. There is no retry, no caching, and no merging of
//! partial results.

use plugdex_catalog::{parse_index, parse_registry, RepositoryIndex};
use plugdex_config::model::SourcesConfig;
use plugdex_core::{Fetcher, PlugdexError, PluginRecord};
use tracing::{info, warn};

/// A decoded document and the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub source_url: String,
    pub value: T,
}

/// Try each URL in order and return the first successfully decoded document.
///
/// `decode` turns the response body into `T`; a decode failure counts as a
/// failed source. Returns `PlugdexError::DataUnavailable` when every source
/// fails (or when `urls` is empty).
pub async fn load_first<T, F>(
    fetcher: &dyn Fetcher,
    urls: &[String],
    decode: F,
) -> Result<Loaded<T>, PlugdexError>
where
    F: Fn(&str) -> Result<T, PlugdexError>,
{
    for url in urls {
        info!(%url, "loading registry document");

        let body = match fetcher.get_text(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(%url, error = %e, "source failed, trying next");
                continue;
            }
        };

        match decode(&body) {
            Ok(value) => {
                return Ok(Loaded {
                    source_url: url.clone(),
                    value,
                });
            }
            Err(e) => {
                warn!(%url, error = %e, "source returned an unusable document, trying next");
            }
        }
    }

    Err(PlugdexError::DataUnavailable {
        attempted: urls.len(),
    })
}

/// Load the plugin-details list from the configured sources.
pub async fn load_plugins(
    fetcher: &dyn Fetcher,
    sources: &SourcesConfig,
) -> Result<Loaded<Vec<PluginRecord>>, PlugdexError> {
    let loaded = load_first(fetcher, &sources.details, parse_registry).await?;
    info!(
        source = %loaded.source_url,
        count = loaded.value.len(),
        "plugin data loaded"
    );
    Ok(loaded)
}

/// Load the plugin-index list used for repository links.
///
/// Failure here is not fatal: an empty index is returned and cards render
/// without source links.
pub async fn load_repository_index(
    fetcher: &dyn Fetcher,
    sources: &SourcesConfig,
) -> RepositoryIndex {
    match load_first(fetcher, &sources.index, parse_index).await {
        Ok(loaded) => {
            info!(
                source = %loaded.source_url,
                repositories = loaded.value.len(),
                "plugin index loaded"
            );
            loaded.value
        }
        Err(e) => {
            warn!(error = %e, "plugin index unavailable, cards render without source links");
            RepositoryIndex::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugdex_test_utils::{fixtures, MockFetcher};
    use tracing_test::traced_test;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|u| u.to_string()).collect()
    }

    fn sources(details: &[&str], index: &[&str]) -> SourcesConfig {
        SourcesConfig {
            details: urls(details),
            index: urls(index),
            timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn first_success_wins() {
        let fetcher = MockFetcher::new()
            .with_body("https://a/details.json", "\"from a\"")
            .with_body("https://b/details.json", "\"from b\"");

        let loaded = load_first(
            &fetcher,
            &urls(&["https://a/details.json", "https://b/details.json"]),
            |body| Ok(body.to_string()),
        )
        .await
        .unwrap();

        assert_eq!(loaded.source_url, "https://a/details.json");
        assert_eq!(loaded.value, "\"from a\"");
        assert_eq!(fetcher.requests(), vec!["https://a/details.json"]);
    }

    #[tokio::test]
    #[traced_test]
    async fn falls_back_when_primary_fails() {
        let fetcher = MockFetcher::new()
            .with_failure("https://a/details.json")
            .with_body("https://b/details.json", &fixtures::registry_json());

        let loaded = load_plugins(
            &fetcher,
            &sources(&["https://a/details.json", "https://b/details.json"], &[]),
        )
        .await
        .unwrap();

        assert_eq!(loaded.source_url, "https://b/details.json");
        assert_eq!(loaded.value, fixtures::sample_records());
        assert!(logs_contain("source failed, trying next"));
    }

    #[tokio::test]
    async fn undecodable_document_falls_through() {
        let fetcher = MockFetcher::new()
            .with_body("https://a/details.json", "<html>rate limited</html>")
            .with_body("https://b/details.json", &fixtures::registry_json());

        let loaded = load_plugins(
            &fetcher,
            &sources(&["https://a/details.json", "https://b/details.json"], &[]),
        )
        .await
        .unwrap();

        assert_eq!(loaded.source_url, "https://b/details.json");
    }

    #[tokio::test]
    async fn one_bad_entry_does_not_reject_the_source() {
        let good = fixtures::registry_json();
        let with_bad_entry = format!("[{{\"id\":\"broken\"}},{}", &good[1..]);
        let fetcher = MockFetcher::new()
            .with_body("https://a/details.json", &with_bad_entry)
            .with_body("https://b/details.json", &good);

        let loaded = load_plugins(
            &fetcher,
            &sources(&["https://a/details.json", "https://b/details.json"], &[]),
        )
        .await
        .unwrap();

        assert_eq!(loaded.source_url, "https://a/details.json");
        assert_eq!(loaded.value, fixtures::sample_records());
        assert_eq!(fetcher.requests(), vec!["https://a/details.json"]);
    }

    #[tokio::test]
    async fn all_sources_failing_is_data_unavailable() {
        let fetcher = MockFetcher::new()
            .with_failure("https://a/details.json")
            .with_failure("https://b/details.json");

        let err = load_plugins(
            &fetcher,
            &sources(&["https://a/details.json", "https://b/details.json"], &[]),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, PlugdexError::DataUnavailable { attempted: 2 }));
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[tokio::test]
    async fn empty_source_list_is_data_unavailable() {
        let fetcher = MockFetcher::new();
        let err = load_first(&fetcher, &[], |b| Ok(b.to_string())).await.unwrap_err();
        assert!(matches!(err, PlugdexError::DataUnavailable { attempted: 0 }));
    }

    #[tokio::test]
    async fn repository_index_loads_with_fallback() {
        let fetcher = MockFetcher::new()
            .with_failure("https://a/plugins.json")
            .with_body("https://b/plugins.json", &fixtures::index_json());

        let index = load_repository_index(
            &fetcher,
            &sources(&[], &["https://a/plugins.json", "https://b/plugins.json"]),
        )
        .await;

        assert_eq!(
            index.repository_url("hello-world"),
            Some("https://github.com/example/hello-world")
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn repository_index_failure_is_not_fatal() {
        let fetcher = MockFetcher::new().with_failure("https://a/plugins.json");

        let index =
            load_repository_index(&fetcher, &sources(&[], &["https://a/plugins.json"])).await;

        assert!(index.is_empty());
        assert!(logs_contain("cards render without source links"));
    }
}
