// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic theme-framework compatibility adapter.
//!
//! Theme engines differ only in identity and detection symbol; the adapter
//! itself is the same shell for each, parameterized at construction. The
//! default engine follows the host's standard rendering rules and may not
//! work for every theme, which is why users can pin an engine manually.

use reelpin_core::{AdapterFactory, CompatAdapter, EngineCategory, ReelpinError};
use tracing::debug;

pub struct ThemeFrameworkCompat {
    engine_id: String,
    title: String,
}

impl ThemeFrameworkCompat {
    pub fn new(engine_id: impl Into<String>, title: impl Into<String>) -> Self {
        let adapter = Self {
            engine_id: engine_id.into(),
            title: title.into(),
        };
        debug!(engine = %adapter.engine_id, "theme framework compatibility constructed");
        adapter
    }
}

impl CompatAdapter for ThemeFrameworkCompat {
    fn engine_id(&self) -> &str {
        &self.engine_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> EngineCategory {
        EngineCategory::ThemeFramework
    }
}

pub struct ThemeFrameworkFactory;

impl AdapterFactory for ThemeFrameworkFactory {
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> {
        Ok(Box::new(ThemeFrameworkCompat::new(engine_id, title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_factory_serves_any_theme_engine() {
        let astra = ThemeFrameworkFactory.create("astra", "Astra").unwrap();
        let divi = ThemeFrameworkFactory.create("divi", "Divi").unwrap();
        assert_eq!(astra.engine_id(), "astra");
        assert_eq!(divi.title(), "Divi");
        assert_eq!(astra.category(), EngineCategory::ThemeFramework);
    }
}
