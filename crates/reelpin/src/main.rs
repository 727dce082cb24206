// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reelpin - featured video compatibility for content-management hosts.
//!
//! This is the binary entry point. It loads and validates configuration,
//! wires the registries and activators once, and dispatches to the
//! subcommand implementations.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod doctor;
mod runtime;
mod settings;
mod status;

use runtime::{RegistrationHooks, Runtime};

/// Reelpin - featured video compatibility for content-management hosts.
#[derive(Parser, Debug)]
#[command(name = "reelpin", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output structured JSON where supported.
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show detected engines and active adapters per category.
    Status,
    /// Inspect and change persisted settings.
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Run non-destructive health checks.
    Doctor,
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// List the general section's fields and current values.
    List,
    /// Print one option's value.
    Get { key: String },
    /// Validate and persist one option.
    Set { key: String, value: String },
}

fn main() {
    let cli = Cli::parse();

    let config = match reelpin_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            reelpin_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.app.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    // Descriptor injection points for external integrations; empty in the
    // stock binary.
    let hooks = RegistrationHooks::new();
    let runtime = match Runtime::from_config(&config, &hooks) {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Some(Commands::Status) => status::run_status(
            &runtime,
            &config.host.loaded_extensions,
            cli.json,
            cli.plain,
        ),
        Some(Commands::Settings { action }) => {
            let store = runtime::open_store(&config);
            match store {
                Ok(mut store) => match action {
                    SettingsAction::List => settings::run_list(
                        &runtime,
                        &mut store,
                        config.license.premium,
                        cli.json,
                    ),
                    SettingsAction::Get { key } => {
                        settings::run_get(&runtime, &mut store, config.license.premium, key)
                    }
                    SettingsAction::Set { key, value } => settings::run_set(
                        &runtime,
                        &mut store,
                        config.license.premium,
                        key,
                        value,
                    ),
                },
                Err(err) => Err(err),
            }
        }
        Some(Commands::Doctor) => doctor::run_doctor(&config, &runtime, cli.plain),
        None => {
            println!("reelpin: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
