// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading the catalog every command works from.

use plugdex_catalog::{Catalog, RepositoryIndex};
use plugdex_config::PlugdexConfig;
use plugdex_core::{Fetcher, PlugdexError, SortKey};
use plugdex_fetch::{load_plugins, load_repository_index};

/// Records, their repository links, and where they came from.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub index: RepositoryIndex,
    pub source_url: String,
}

/// Fetch the registry and repository index, then apply `search` and `sort`.
///
/// `sort` falls back to `display.default_sort`. The two documents are
/// fetched concurrently; only the registry is required.
pub async fn load_catalog(
    fetcher: &dyn Fetcher,
    config: &PlugdexConfig,
    search: Option<&str>,
    sort: Option<SortKey>,
) -> Result<LoadedCatalog, PlugdexError> {
    let (plugins, index) = tokio::join!(
        load_plugins(fetcher, &config.sources),
        load_repository_index(fetcher, &config.sources),
    );
    let plugins = plugins?;

    let mut catalog =
        Catalog::with_sort(plugins.value, sort.unwrap_or(config.display.default_sort));
    if let Some(term) = search {
        catalog.set_search(term);
    }

    Ok(LoadedCatalog {
        catalog,
        index,
        source_url: plugins.source_url,
    })
}
