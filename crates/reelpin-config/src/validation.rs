// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as non-empty paths and unique host entries.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::ReelpinConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ReelpinConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.app.log_level
            ),
        });
    }

    if config.options.path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "options.path must not be empty".to_string(),
        });
    }

    let mut seen_symbols = HashSet::new();
    for symbol in &config.host.loaded_extensions {
        if symbol.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "host.loaded_extensions entries must not be empty".to_string(),
            });
        } else if !seen_symbols.insert(symbol) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate symbol `{symbol}` in host.loaded_extensions"),
            });
        }
    }

    let mut seen_types = HashSet::new();
    for (i, content_type) in config.host.content_types.iter().enumerate() {
        if content_type.id.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("host.content_types[{i}].id must not be empty"),
            });
        } else if !seen_types.insert(&content_type.id) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate content type id `{}` in host.content_types",
                    content_type.id
                ),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentTypeConfig;

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&ReelpinConfig::default()).is_ok());
    }

    #[test]
    fn bad_log_level_fails_validation() {
        let mut config = ReelpinConfig::default();
        config.app.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }

    #[test]
    fn empty_options_path_fails_validation() {
        let mut config = ReelpinConfig::default();
        config.options.path = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("options.path"))
        ));
    }

    #[test]
    fn duplicate_extension_symbols_fail_validation() {
        let mut config = ReelpinConfig::default();
        config.host.loaded_extensions =
            vec!["WooCommerce".to_string(), "WooCommerce".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("duplicate symbol"))
        ));
    }

    #[test]
    fn duplicate_content_type_ids_fail_validation() {
        let mut config = ReelpinConfig::default();
        config.host.content_types = vec![
            ContentTypeConfig {
                id: "post".to_string(),
                label: "Posts".to_string(),
            },
            ContentTypeConfig {
                id: "post".to_string(),
                label: "Articles".to_string(),
            },
        ];
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("duplicate content type"))
        ));
    }

    #[test]
    fn all_errors_are_collected_not_first_only() {
        let mut config = ReelpinConfig::default();
        config.app.log_level = "loud".to_string();
        config.options.path = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
