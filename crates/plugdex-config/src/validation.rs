// SPDX-FileCopyrightText: 2026 Plugdex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde cannot express: usable source lists,
//! positive sizes, and a recognized log level.

use crate::diagnostic::ConfigError;
use crate::model::PlugdexConfig;

/// Log levels accepted by the tracing filter.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns all collected validation errors (does not fail fast).
pub fn validate_config(config: &PlugdexConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    validate_sources("sources.details", &config.sources.details, &mut errors);
    validate_sources("sources.index", &config.sources.index, &mut errors);

    if config.sources.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "sources.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.display.batch_size == 0 {
        errors.push(ConfigError::Validation {
            message: "display.batch_size must be at least 1".to_string(),
        });
    }

    if config.display.theme.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "display.theme must not be empty".to_string(),
        });
    }

    if config.display.site_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "display.site_dir must not be empty".to_string(),
        });
    }

    let level = config.log.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` is not one of: {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_sources(key: &str, urls: &[String], errors: &mut Vec<ConfigError>) {
    if urls.is_empty() {
        errors.push(ConfigError::Validation {
            message: format!("{key} must list at least one URL"),
        });
        return;
    }

    for (i, url) in urls.iter().enumerate() {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ConfigError::Validation {
                message: format!("{key}[{i}] `{url}` must be an http:// or https:// URL"),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&PlugdexConfig::default()).is_ok());
    }

    #[test]
    fn empty_details_fails_validation() {
        let mut config = PlugdexConfig::default();
        config.sources.details.clear();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "sources.details must list"));
    }

    #[test]
    fn non_http_source_fails_validation() {
        let mut config = PlugdexConfig::default();
        config.sources.index = vec!["file:///tmp/plugins.json".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "sources.index[0]"));
    }

    #[test]
    fn zero_batch_size_fails_validation() {
        let mut config = PlugdexConfig::default();
        config.display.batch_size = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "batch_size"));
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = PlugdexConfig::default();
        config.log.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "log.level"));
    }

    #[test]
    fn collects_every_error() {
        let mut config = PlugdexConfig::default();
        config.sources.timeout_secs = 0;
        config.display.batch_size = 0;
        config.display.theme = " ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn uppercase_log_level_accepted() {
        let mut config = PlugdexConfig::default();
        config.log.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
