// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./plugdex.toml` > `~/.config/plugdex/plugdex.toml` > `/etc/plugdex/plugdex.toml`
//! with environment variable overrides via `PLUGDEX_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PlugdexConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/plugdex/plugdex.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "plugdex.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("plugdex").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/plugdex/plugdex.toml` (system-wide)
/// 3. `~/.config/plugdex/plugdex.toml` (user XDG config)
/// 4. `./plugdex.toml` (local directory)
/// 5. `PLUGDEX_*` environment variables
pub fn load_config() -> Result<PlugdexConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PlugdexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlugdexConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlugdexConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlugdexConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(PlugdexConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment provider mapping `PLUGDEX_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")`: keys such as
/// `batch_size` contain underscores and must stay intact
/// (`PLUGDEX_DISPLAY_BATCH_SIZE` -> `display.batch_size`).
fn env_provider() -> Env {
    Env::prefixed("PLUGDEX_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("sources_", "sources.", 1)
            .replacen("display_", "display.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use plugdex_core::SortKey;

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PLUGDEX_DISPLAY_BATCH_SIZE", "12");
            jail.set_env("PLUGDEX_DISPLAY_DEFAULT_SORT", "author");
            jail.set_env("PLUGDEX_LOG_LEVEL", "debug");
            jail.set_env("PLUGDEX_SOURCES_TIMEOUT_SECS", "3");

            let config: PlugdexConfig = Figment::new()
                .merge(Serialized::defaults(PlugdexConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.display.batch_size, 12);
            assert_eq!(config.display.default_sort, SortKey::Author);
            assert_eq!(config.log.level, "debug");
            assert_eq!(config.sources.timeout_secs, 3);
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_FILE,
                r#"
[display]
theme = "dark"
"#,
            )?;

            let config: PlugdexConfig = Figment::new()
                .merge(Serialized::defaults(PlugdexConfig::default()))
                .merge(Toml::file(LOCAL_CONFIG_FILE))
                .extract()?;

            assert_eq!(config.display.theme, "dark");
            assert_eq!(config.display.batch_size, 6);
            Ok(())
        });
    }

    #[test]
    fn explicit_path_is_loaded() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
[sources]
details = ["http://localhost:9000/details.json"]
"#,
            )?;

            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.sources.details, vec!["http://localhost:9000/details.json"]);
            // Untouched list keeps its default.
            assert_eq!(config.sources.index.len(), 2);
            Ok(())
        });
    }
}
