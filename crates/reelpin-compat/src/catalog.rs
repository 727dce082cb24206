// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in engine catalogs.
//!
//! Returns the descriptor tables for the host extensions Reelpin ships
//! adapters for, one table per registry category. External integrations are
//! injected through the registration filter chain, not by editing these
//! tables.

use reelpin_engine::EngineDescriptor;

use crate::astra::{AstraProCompat, AstraProFactory};
use crate::elementor::{ElementorCompat, ElementorFactory};
use crate::salient::{SalientCoreCompat, SalientCoreFactory};
use crate::theme::ThemeFrameworkFactory;
use crate::woocommerce::{WooCommerceCompat, WooCommerceFactory};

/// Descriptors for the plugin-integration category, in precedence order.
///
/// Ordering is load-bearing: the activation pass resolves simultaneous
/// detections in favor of the last-registered match.
pub fn builtin_plugin_engines() -> Vec<EngineDescriptor> {
    vec![
        EngineDescriptor::for_symbol(
            "woocommerce",
            "WooCommerce",
            WooCommerceCompat::SYMBOL,
            Box::new(WooCommerceFactory),
        ),
        EngineDescriptor::for_symbol(
            "astra-addon",
            "Astra Pro",
            AstraProCompat::SYMBOL,
            Box::new(AstraProFactory),
        ),
        EngineDescriptor::for_symbol(
            "salient-core",
            "Salient Core",
            SalientCoreCompat::SYMBOL,
            Box::new(SalientCoreFactory),
        ),
        EngineDescriptor::for_symbol(
            "elementor",
            "Elementor",
            ElementorCompat::SYMBOL,
            Box::new(ElementorFactory),
        ),
    ]
}

/// Descriptors for the theme-framework category.
pub fn builtin_theme_engines() -> Vec<EngineDescriptor> {
    vec![
        EngineDescriptor::for_symbol(
            "astra",
            "Astra",
            "Astra_Builder_Loader",
            Box::new(ThemeFrameworkFactory),
        ),
        EngineDescriptor::for_symbol(
            "oceanwp",
            "OceanWP",
            "OCEANWP_Theme_Class",
            Box::new(ThemeFrameworkFactory),
        ),
        EngineDescriptor::for_symbol(
            "generatepress",
            "GeneratePress",
            "GeneratePress_Site",
            Box::new(ThemeFrameworkFactory),
        ),
        EngineDescriptor::for_symbol(
            "divi",
            "Divi",
            "ET_Builder_Module",
            Box::new(ThemeFrameworkFactory),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelpin_core::{EngineCategory, StaticHostEnv};
    use reelpin_engine::{AdapterActivator, EngineRegistry};
    use reelpin_hooks::FilterChain;

    #[test]
    fn plugin_catalog_order_matches_precedence_table() {
        let ids: Vec<String> = builtin_plugin_engines()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec!["woocommerce", "astra-addon", "salient-core", "elementor"]);
    }

    #[test]
    fn plugin_engines_detect_by_host_symbol() {
        let registration = FilterChain::new("engine_registration");
        let registry = EngineRegistry::with_descriptors(
            EngineCategory::PluginIntegration,
            builtin_plugin_engines(),
            &registration,
        )
        .unwrap();

        let host = StaticHostEnv::with_symbols(["WooCommerce", "Elementor\\Plugin"]);
        let detected: Vec<&str> = registry
            .detect_active(&host)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(detected, vec!["woocommerce", "elementor"]);
    }

    #[test]
    fn simultaneous_detections_activate_the_later_entry() {
        let registration = FilterChain::new("engine_registration");
        let registry = EngineRegistry::with_descriptors(
            EngineCategory::PluginIntegration,
            builtin_plugin_engines(),
            &registration,
        )
        .unwrap();
        let host = StaticHostEnv::with_symbols(["WooCommerce", "Elementor\\Plugin"]);

        let activator = AdapterActivator::new();
        activator.activate(&registry, &host);
        assert_eq!(activator.active_engine_id(), Some("elementor"));
    }

    #[test]
    fn theme_catalog_produces_theme_category_adapters() {
        let registration = FilterChain::new("engine_registration");
        let registry = EngineRegistry::with_descriptors(
            EngineCategory::ThemeFramework,
            builtin_theme_engines(),
            &registration,
        )
        .unwrap();
        let host = StaticHostEnv::with_symbols(["OCEANWP_Theme_Class"]);

        let activator = AdapterActivator::new();
        activator.activate(&registry, &host);
        let adapter = activator.active_adapter().unwrap();
        assert_eq!(adapter.engine_id(), "oceanwp");
        assert_eq!(adapter.category(), EngineCategory::ThemeFramework);
    }
}
