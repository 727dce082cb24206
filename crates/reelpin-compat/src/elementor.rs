// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Elementor page-builder compatibility adapter.
//!
//! Elementor renders featured media through its own widget tree, so the
//! host-side collaborator swaps the featured-image widget source when this
//! adapter is active.

use reelpin_core::{AdapterFactory, CompatAdapter, EngineCategory, ReelpinError};
use tracing::debug;

pub struct ElementorCompat {
    engine_id: String,
    title: String,
}

impl ElementorCompat {
    /// Host symbol whose presence marks the page builder as loaded.
    pub const SYMBOL: &'static str = "Elementor\\Plugin";

    pub fn new(engine_id: impl Into<String>, title: impl Into<String>) -> Self {
        let adapter = Self {
            engine_id: engine_id.into(),
            title: title.into(),
        };
        debug!(engine = %adapter.engine_id, "Elementor compatibility constructed");
        adapter
    }
}

impl CompatAdapter for ElementorCompat {
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

pub struct ElementorFactory;

impl AdapterFactory for ElementorFactory {
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> {
        Ok(Box::new(ElementorCompat::new(engine_id, title)))
    }
}
