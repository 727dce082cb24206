// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! WooCommerce compatibility adapter.
//!
//! When the e-commerce extension is loaded, featured videos replace the
//! first product-gallery image. The gallery markup itself is produced by the
//! host-side rendering collaborator; this adapter carries the integration's
//! identity and activation state.

use reelpin_core::{AdapterFactory, CompatAdapter, EngineCategory, ReelpinError};
use tracing::debug;

pub struct WooCommerceCompat {
    engine_id: String,
    title: String,
}

impl WooCommerceCompat {
    /// Host symbol whose presence marks the extension as loaded.
    pub const SYMBOL: &'static str = "WooCommerce";

    pub fn new(engine_id: impl Into<String>, title: impl Into<String>) -> Self {
        let adapter = Self {
            engine_id: engine_id.into(),
            title: title.into(),
        };
        debug!(engine = %adapter.engine_id, "WooCommerce compatibility constructed");
        adapter
    }
}

impl CompatAdapter for WooCommerceCompat {
    fn engine_id(&self) -> &str {
        &self.engine_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> EngineCategory {
        EngineCategory::PluginIntegration
    }
}

/// Factory registered with the plugin-engine catalog.
pub struct WooCommerceFactory;

impl AdapterFactory for WooCommerceFactory {
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> {
        Ok(Box::new(WooCommerceCompat::new(engine_id, title)))
    }
}
