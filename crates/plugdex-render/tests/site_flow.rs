// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search, sort, render, and write a site from fixture data.

use plugdex_catalog::{parse_index, parse_registry, Catalog};
use plugdex_core::SortKey;
use plugdex_render::{render_site, write_site, Page};
use plugdex_test_utils::fixtures;

fn grid_order(html: &str) -> Vec<String> {
    html.match_indices(r#"data-plugin-id=""#)
        .map(|(i, m)| {
            let rest = &html[i + m.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn sorted_search_results_render_in_order() {
    let records = parse_registry(&fixtures::registry_json()).unwrap();
    let index = parse_index(&fixtures::index_json()).unwrap();
    let mut catalog = Catalog::with_sort(records, SortKey::Version);
    catalog.set_search("o");

    let mut page = Page::new(2);
    page.finish_loading(catalog.len());
    page.show_records(&catalog.view(), &index);

    let html = render_site(&page, catalog.all(), "light");
    assert_eq!(grid_order(&html), vec!["memo", "weather", "hello-world", "dice"]);
    assert!(html.contains("https://github.com/example/weather"));
}

#[test]
fn search_with_no_hits_renders_empty_state() {
    let records = parse_registry(&fixtures::registry_json()).unwrap();
    let mut catalog = Catalog::new(records);
    catalog.set_search("nothing-matches-this");

    let mut page = Page::default();
    page.finish_loading(catalog.len());
    page.show_records(&catalog.view(), &Default::default());

    let html = render_site(&page, catalog.all(), "light");
    assert!(html.contains("No plugins match"));
    assert!(grid_order(&html).is_empty());
}

#[test]
fn written_site_is_readable() {
    let tmp = tempfile::tempdir().unwrap();
    let records = fixtures::sample_records();
    let catalog = Catalog::new(records);

    let mut page = Page::default();
    page.finish_loading(catalog.len());
    page.show_records(&catalog.view(), &Default::default());

    let path = write_site(tmp.path(), &render_site(&page, catalog.all(), "cupcake")).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains(r#"data-theme="cupcake""#));
    assert_eq!(grid_order(&written).len(), 4);
}
