// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `reelpin doctor` command implementation.
//!
//! Runs a series of non-destructive checks over the configuration, options
//! store, and schema build, and prints a sectioned report. Exits non-zero
//! when any check fails.

use std::io::IsTerminal;

use reelpin_config::ReelpinConfig;
use reelpin_core::ReelpinError;
use reelpin_settings::{GeneralSection, SchemaContext, SettingsSchema, TomlFileBackend};

use crate::runtime::{Runtime, open_store};

/// Outcome of one doctor check.
#[derive(Debug, PartialEq)]
enum CheckResult {
    Pass(String),
    Warn(String),
    Fail(String),
}

fn check_options_file(config: &ReelpinConfig) -> CheckResult {
    let path = std::path::Path::new(&config.options.path);
    if !path.exists() {
        return CheckResult::Warn(format!(
            "options file `{}` does not exist yet (created on first save)",
            path.display()
        ));
    }
    match TomlFileBackend::open(path) {
        Ok(_) => CheckResult::Pass(format!("options file `{}` is readable", path.display())),
        Err(err) => CheckResult::Fail(err.to_string()),
    }
}

fn check_detection(runtime: &Runtime) -> CheckResult {
    let plugin = runtime.plugins.activate(&runtime.host);
    let theme = runtime.themes.activate(&runtime.host);
    match (plugin, theme) {
        (None, None) => CheckResult::Warn(
            "no compatibility engine detected in the described host".to_string(),
        ),
        (plugin, theme) => {
            let mut active = Vec::new();
            if let Some(id) = plugin {
                active.push(format!("plugin: {id}"));
            }
            if let Some(id) = theme {
                active.push(format!("theme: {id}"));
            }
            CheckResult::Pass(format!("active adapters -- {}", active.join(", ")))
        }
    }
}

fn check_schema(config: &ReelpinConfig, runtime: &Runtime) -> CheckResult {
    let store = match open_store(config) {
        Ok(store) => store,
        Err(err) => return CheckResult::Fail(err.to_string()),
    };
    let schema = SettingsSchema::new();
    let ctx = SchemaContext {
        registry: &runtime.themes.registry,
        options: &store,
        host: &runtime.host,
        premium_active: config.license.premium,
    };
    match schema.build(&GeneralSection, &ctx) {
        Ok(fields) => CheckResult::Pass(format!(
            "general section builds cleanly ({} fields)",
            fields.len()
        )),
        Err(err) => CheckResult::Fail(err.to_string()),
    }
}

/// Run the `reelpin doctor` command.
pub fn run_doctor(
    config: &ReelpinConfig,
    runtime: &Runtime,
    plain: bool,
) -> Result<(), ReelpinError> {
    let checks = vec![
        ("options store", check_options_file(config)),
        ("engine detection", check_detection(runtime)),
        ("settings schema", check_schema(config, runtime)),
    ];

    let use_color = !plain && std::io::stdout().is_terminal();

    println!();
    println!("  reelpin doctor");
    println!("  {}", "-".repeat(35));

    let mut failed = false;
    for (name, result) in &checks {
        let (tag, message) = match result {
            CheckResult::Pass(msg) => ("ok", msg),
            CheckResult::Warn(msg) => ("warn", msg),
            CheckResult::Fail(msg) => {
                failed = true;
                ("fail", msg)
            }
        };
        if use_color {
            use colored::Colorize;
            let tag = match tag {
                "ok" => "ok".green(),
                "warn" => "warn".yellow(),
                _ => "fail".red(),
            };
            println!("    [{tag}] {name}: {message}");
        } else {
            println!("    [{tag}] {name}: {message}");
        }
    }
    println!();

    if failed {
        Err(ReelpinError::Internal("doctor checks failed".to_string()))
    } else {
        Ok(())
    }
}
