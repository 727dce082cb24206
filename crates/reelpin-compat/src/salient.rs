// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Salient Core compatibility adapter.

use reelpin_core::{AdapterFactory, CompatAdapter, EngineCategory, ReelpinError};
use tracing::debug;

pub struct SalientCoreCompat {
    engine_id: String,
    title: String,
}

impl SalientCoreCompat {
    /// Host symbol whose presence marks the extension as loaded.
    pub const SYMBOL: &'static str = "Salient_Core";

    pub fn new(engine_id: impl Into<String>, title: impl Into<String>) -> Self {
        let adapter = Self {
            engine_id: engine_id.into(),
            title: title.into(),
        };
        debug!(engine = %adapter.engine_id, "Salient Core compatibility constructed");
        adapter
    }
}

impl CompatAdapter for SalientCoreCompat {
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

pub struct SalientCoreFactory;

impl AdapterFactory for SalientCoreFactory {
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> {
        Ok(Box::new(SalientCoreCompat::new(engine_id, title)))
    }
}
