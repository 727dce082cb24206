// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Astra Pro add-on compatibility adapter.

use reelpin_core::{AdapterFactory, CompatAdapter, EngineCategory, ReelpinError};
use tracing::debug;

pub struct AstraProCompat {
    engine_id: String,
    title: String,
}

impl AstraProCompat {
    /// Host symbol whose presence marks the add-on as loaded.
    pub const SYMBOL: &'static str = "Astra_Addon_Update";

    pub fn new(engine_id: impl Into<String>, title: impl Into<String>) -> Self {
        let adapter = Self {
            engine_id: engine_id.into(),
            title: title.into(),
        };
        debug!(engine = %adapter.engine_id, "Astra Pro compatibility constructed");
        adapter
    }
}

impl CompatAdapter for AstraProCompat {
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

pub struct AstraProFactory;

impl AdapterFactory for AstraProFactory {
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> {
        Ok(Box::new(AstraProCompat::new(engine_id, title)))
    }
}
