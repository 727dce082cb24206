// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Reelpin.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Reelpin configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReelpinConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Described host environment: which extension symbols are loaded and
    /// which content types exist.
    #[serde(default)]
    pub host: HostConfig,

    /// Options store settings.
    #[serde(default)]
    pub options: OptionsConfig,

    /// Premium licensing settings.
    #[serde(default)]
    pub license: LicenseConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in CLI output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "reelpin".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Described host environment.
///
/// Outside the live CMS process, detection has no host to probe; this
/// section declares the snapshot the CLI builds its `HostEnv` from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Extension symbols considered loaded (e.g. "WooCommerce").
    #[serde(default)]
    pub loaded_extensions: Vec<String>,

    /// Content types the host exposes for featured-video support.
    #[serde(default = "default_content_types")]
    pub content_types: Vec<ContentTypeConfig>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            loaded_extensions: Vec::new(),
            content_types: default_content_types(),
        }
    }
}

/// One `(id, label)` content type entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContentTypeConfig {
    pub id: String,
    pub label: String,
}

fn default_content_types() -> Vec<ContentTypeConfig> {
    vec![
        ContentTypeConfig {
            id: "post".to_string(),
            label: "Posts".to_string(),
        },
        ContentTypeConfig {
            id: "page".to_string(),
            label: "Pages".to_string(),
        },
    ]
}

/// Options store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsConfig {
    /// Path to the TOML options file.
    #[serde(default = "default_options_path")]
    pub path: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            path: default_options_path(),
        }
    }
}

fn default_options_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("reelpin").join("options.toml"))
        .unwrap_or_else(|| std::path::PathBuf::from("options.toml"))
        .to_string_lossy()
        .into_owned()
}

/// Premium licensing configuration.
///
/// The premium flag gates promotional settings groups; the key itself is
/// verified by the external licensing collaborator, not here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseConfig {
    /// Whether the premium tier is active.
    #[serde(default)]
    pub premium: bool,

    /// License key, if any.
    #[serde(default)]
    pub license_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_bare_host() {
        let config = ReelpinConfig::default();
        assert_eq!(config.app.name, "reelpin");
        assert!(config.host.loaded_extensions.is_empty());
        assert_eq!(config.host.content_types.len(), 2);
        assert!(!config.license.premium);
    }

    #[test]
    fn host_section_deserializes_content_types() {
        let toml_str = r#"
[host]
loaded_extensions = ["WooCommerce"]
content_types = [
    { id = "post", label = "Posts" },
    { id = "product", label = "Products" },
]
"#;
        let config: ReelpinConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host.loaded_extensions, vec!["WooCommerce"]);
        assert_eq!(config.host.content_types[1].id, "product");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml_str = r#"
[app]
naem = "typo"
"#;
        assert!(toml::from_str::<ReelpinConfig>(toml_str).is_err());
    }
}
