// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composition root: builds the host snapshot, registries, activators, and
//! options store from configuration.
//!
//! There is no hidden global state. Everything constructed here is owned by
//! the caller and passed by reference for the rest of the process, with the
//! registry/activator pair per category constructed once at startup.

use reelpin_compat::{builtin_plugin_engines, builtin_theme_engines};
use reelpin_config::ReelpinConfig;
use reelpin_core::{EngineCategory, ReelpinError, StaticHostEnv};
use reelpin_engine::{AdapterActivator, EngineDescriptor, EngineRegistry};
use reelpin_hooks::FilterChain;
use reelpin_settings::{OptionsStore, TomlFileBackend};

/// One category's registry plus its write-once activator.
pub struct Provider {
    pub registry: EngineRegistry,
    pub activator: AdapterActivator,
}

impl Provider {
    fn build(
        category: EngineCategory,
        builtins: Vec<EngineDescriptor>,
        registration: &FilterChain<Vec<EngineDescriptor>>,
    ) -> Result<Self, ReelpinError> {
        Ok(Self {
            registry: EngineRegistry::with_descriptors(category, builtins, registration)?,
            activator: AdapterActivator::new(),
        })
    }

    /// Run the detection pass against `host` (idempotent after the first
    /// call) and report the winning engine id, if any.
    pub fn activate(&self, host: &StaticHostEnv) -> Option<String> {
        self.activator
            .activate(&self.registry, host)
            .engine_id()
            .map(str::to_string)
    }
}

/// Descriptor-injection extension points, one chain per category.
pub struct RegistrationHooks {
    pub plugins: FilterChain<Vec<EngineDescriptor>>,
    pub themes: FilterChain<Vec<EngineDescriptor>>,
}

impl RegistrationHooks {
    pub fn new() -> Self {
        Self {
            plugins: FilterChain::new("plugin_engine_registration"),
            themes: FilterChain::new("theme_engine_registration"),
        }
    }
}

impl Default for RegistrationHooks {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the commands need from startup wiring.
pub struct Runtime {
    pub host: StaticHostEnv,
    pub plugins: Provider,
    pub themes: Provider,
}

impl Runtime {
    /// Build the runtime from configuration.
    ///
    /// The registration hooks are the external descriptor-injection points;
    /// each chain runs exactly once, against its own category's registry.
    pub fn from_config(
        config: &ReelpinConfig,
        hooks: &RegistrationHooks,
    ) -> Result<Self, ReelpinError> {
        let mut host = StaticHostEnv::with_symbols(config.host.loaded_extensions.clone());
        for content_type in &config.host.content_types {
            host.add_content_type(&content_type.id, &content_type.label);
        }

        Ok(Self {
            host,
            plugins: Provider::build(
                EngineCategory::PluginIntegration,
                builtin_plugin_engines(),
                &hooks.plugins,
            )?,
            themes: Provider::build(
                EngineCategory::ThemeFramework,
                builtin_theme_engines(),
                &hooks.themes,
            )?,
        })
    }
}

/// Open the configured options store.
pub fn open_store(config: &ReelpinConfig) -> Result<OptionsStore, ReelpinError> {
    let backend = TomlFileBackend::open(&config.options.path)?;
    Ok(OptionsStore::new(Box::new(backend)))
}
