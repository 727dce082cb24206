// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `reelpin status` command implementation.
//!
//! Runs the detection pass against the described host environment and
//! displays, per category, which engines were detected and which adapter
//! occupies the activation slot.

use std::io::IsTerminal;

use reelpin_core::ReelpinError;
use serde::Serialize;

use crate::runtime::{Provider, Runtime};

/// One category's row in the structured `--json` output.
#[derive(Debug, Serialize)]
pub struct CategoryStatus {
    pub category: String,
    pub registered: Vec<String>,
    pub detected: Vec<String>,
    pub active_engine: Option<String>,
}

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub loaded_extensions: Vec<String>,
    pub categories: Vec<CategoryStatus>,
}

fn category_status(provider: &Provider, runtime: &Runtime) -> CategoryStatus {
    let detected = provider
        .registry
        .detect_active(&runtime.host)
        .iter()
        .map(|d| d.id.clone())
        .collect();

    CategoryStatus {
        category: provider.registry.category().to_string(),
        registered: provider
            .registry
            .get_available()
            .into_iter()
            .map(|(id, _)| id)
            .collect(),
        detected,
        active_engine: provider.activate(&runtime.host),
    }
}

/// Run the `reelpin status` command.
///
/// If `--json` is passed, outputs structured JSON for scripting.
/// If `--plain` is passed or stdout is not a TTY, disables colors.
pub fn run_status(
    runtime: &Runtime,
    loaded_extensions: &[String],
    json: bool,
    plain: bool,
) -> Result<(), ReelpinError> {
    let response = StatusResponse {
        loaded_extensions: loaded_extensions.to_vec(),
        categories: vec![
            category_status(&runtime.plugins, runtime),
            category_status(&runtime.themes, runtime),
        ],
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_status(&response, use_color);
    }

    Ok(())
}

fn print_status(response: &StatusResponse, use_color: bool) {
    println!();
    println!("  reelpin status");
    println!("  {}", "-".repeat(35));

    if response.loaded_extensions.is_empty() {
        println!("    Host:     no extensions declared");
    } else {
        println!("    Host:     {}", response.loaded_extensions.join(", "));
    }

    for category in &response.categories {
        println!();
        println!("    [{}]", category.category);
        println!("      Registered: {}", category.registered.join(", "));
        match (&category.active_engine, use_color) {
            (Some(engine), true) => {
                use colored::Colorize;
                println!("      Active:     {} {}", "✓".green(), engine.green());
            }
            (Some(engine), false) => {
                println!("      Active:     [OK] {engine}");
            }
            (None, true) => {
                use colored::Colorize;
                println!("      Active:     {} {}", "-".yellow(), "none detected".yellow());
            }
            (None, false) => {
                println!("      Active:     none detected");
            }
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RegistrationHooks;
    use reelpin_config::ReelpinConfig;

    fn runtime_with(symbols: &[&str]) -> Runtime {
        let mut config = ReelpinConfig::default();
        config.host.loaded_extensions = symbols.iter().map(|s| s.to_string()).collect();
        Runtime::from_config(&config, &RegistrationHooks::new()).unwrap()
    }

    #[test]
    fn status_reports_detected_and_active_per_category() {
        let runtime = runtime_with(&["WooCommerce", "Elementor\\Plugin"]);
        let plugins = category_status(&runtime.plugins, &runtime);

        assert_eq!(plugins.detected, vec!["woocommerce", "elementor"]);
        // Simultaneous detections resolve to the later catalog entry.
        assert_eq!(plugins.active_engine.as_deref(), Some("elementor"));
    }

    #[test]
    fn empty_host_reports_nothing_active() {
        let runtime = runtime_with(&[]);
        let themes = category_status(&runtime.themes, &runtime);

        assert!(themes.detected.is_empty());
        assert_eq!(themes.active_engine, None);
        assert_eq!(themes.registered.len(), 4);
    }

    #[test]
    fn status_response_serializes() {
        let response = StatusResponse {
            loaded_extensions: vec!["WooCommerce".to_string()],
            categories: vec![CategoryStatus {
                category: "plugin".to_string(),
                registered: vec!["woocommerce".to_string()],
                detected: vec!["woocommerce".to_string()],
                active_engine: Some("woocommerce".to_string()),
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"active_engine\":\"woocommerce\""));
    }
}
