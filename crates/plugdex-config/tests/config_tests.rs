// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the plugdex configuration system.

use std::io::Write;

use plugdex_config::diagnostic::ConfigError;
use plugdex_config::model::PlugdexConfig;
use plugdex_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use plugdex_core::SortKey;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_plugdex_config() {
    let toml = r#"
[sources]
details = ["https://a.example/details.json", "https://b.example/details.json"]
index = ["https://a.example/plugins.json"]
timeout_secs = 5

[display]
batch_size = 3
debounce_ms = 150
default_sort = "name"
theme = "dark"
site_dir = "public"

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.sources.details.len(), 2);
    assert_eq!(config.sources.index, vec!["https://a.example/plugins.json"]);
    assert_eq!(config.sources.timeout_secs, 5);
    assert_eq!(config.display.batch_size, 3);
    assert_eq!(config.display.debounce_ms, 150);
    assert_eq!(config.display.default_sort, SortKey::Name);
    assert_eq!(config.display.theme, "dark");
    assert_eq!(config.display.site_dir, "public");
    assert_eq!(config.log.level, "debug");
}

/// Missing optional sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    let defaults = PlugdexConfig::default();
    assert_eq!(config.sources.details, defaults.sources.details);
    assert_eq!(config.display.batch_size, 6);
    assert_eq!(config.log.level, "info");
}

/// Unknown field in [display] produces an error mentioning the bad key.
#[test]
fn unknown_field_in_display_produces_error() {
    let toml = r#"
[display]
batch_sise = 4
"#;
    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("batch_sise"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// The diagnostic path suggests the intended key.
#[test]
fn unknown_key_diagnostic_suggests_correction() {
    let toml = r#"
[display]
batch_sise = 4
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "batch_sise");
            assert_eq!(suggestion.as_deref(), Some("batch_size"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// An unknown sort key in config is reported as an invalid value.
#[test]
fn unknown_default_sort_is_rejected() {
    let toml = r#"
[display]
default_sort = "downloads"
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert!(!errors.is_empty());
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_from_str() {
    let toml = r#"
[sources]
details = []
"#;
    let errors = load_and_validate_str(toml).expect_err("empty source list is invalid");
    assert!(errors.iter().any(|e| e.to_string().contains("sources.details")));
}

/// An explicit config path is honored.
#[test]
fn load_and_validate_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\ntheme = \"cupcake\"").unwrap();

    let config = load_and_validate_path(file.path()).expect("valid file");
    assert_eq!(config.display.theme, "cupcake");
}

/// A missing explicit path silently falls back to defaults.
#[test]
fn missing_config_file_silently_skipped() {
    let config = load_and_validate_path(std::path::Path::new("/nonexistent/plugdex.toml"))
        .expect("missing file should be skipped");
    assert_eq!(config.display.batch_size, 6);
}

/// Serialized defaults round-trip through TOML.
#[test]
fn defaults_serialize_to_loadable_toml() {
    let rendered = toml::to_string(&PlugdexConfig::default()).unwrap();
    let config = load_config_from_str(&rendered).expect("rendered defaults should load");
    assert_eq!(config.sources.details, PlugdexConfig::default().sources.details);
}
