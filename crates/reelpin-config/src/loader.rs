// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./reelpin.toml` > `~/.config/reelpin/reelpin.toml`
//! > `/etc/reelpin/reelpin.toml` with environment variable overrides via
//! `REELPIN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ReelpinConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/reelpin/reelpin.toml` (system-wide)
/// 3. `~/.config/reelpin/reelpin.toml` (user XDG config)
/// 4. `./reelpin.toml` (local directory)
/// 5. `REELPIN_*` environment variables
pub fn load_config() -> Result<ReelpinConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<ReelpinConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReelpinConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ReelpinConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ReelpinConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for
/// diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ReelpinConfig::default()))
        .merge(Toml::file("/etc/reelpin/reelpin.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("reelpin/reelpin.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("reelpin.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so underscore-containing
/// key names stay unambiguous: `REELPIN_APP_LOG_LEVEL` must map to
/// `app.log_level`, not `app.log.level`.
fn env_provider() -> Env {
    Env::prefixed("REELPIN_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("host_", "host.", 1)
            .replacen("options_", "options.", 1)
            .replacen("license_", "license.", 1);
        mapped.into()
    })
}
