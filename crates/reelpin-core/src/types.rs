// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the registry, adapters, and settings crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifies which family of host extensions a registry covers.
///
/// The host wires one registry/activator pair per category; descriptors in
/// different categories never compete for the same activation slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum EngineCategory {
    /// E-commerce and page-builder plugin integrations.
    #[strum(serialize = "plugin")]
    #[serde(rename = "plugin")]
    PluginIntegration,
    /// Theme-framework integrations.
    #[strum(serialize = "theme")]
    #[serde(rename = "theme")]
    ThemeFramework,
}

/// A user's stored engine selection for one category.
///
/// Stored as a plain string option: the literal `"auto"` (follow detection),
/// the literal `"disabled"` sentinel, or a concrete engine id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineSelection {
    /// Follow whatever the detection pass activates.
    Auto,
    /// The user switched compatibility handling off entirely.
    Disabled,
    /// A manually pinned engine id.
    Engine(String),
}

impl EngineSelection {
    pub const AUTO_KEY: &'static str = "auto";
    pub const DISABLED_KEY: &'static str = "disabled";

    /// Parse a stored option value. Absent values map to [`EngineSelection::Auto`].
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            None | Some(Self::AUTO_KEY) | Some("") => Self::Auto,
            Some(Self::DISABLED_KEY) => Self::Disabled,
            Some(id) => Self::Engine(id.to_string()),
        }
    }

    /// The string form persisted in the options store.
    pub fn key(&self) -> &str {
        match self {
            Self::Auto => Self::AUTO_KEY,
            Self::Disabled => Self::DISABLED_KEY,
            Self::Engine(id) => id,
        }
    }
}

impl std::fmt::Display for EngineSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_round_trips_through_display() {
        for category in [EngineCategory::PluginIntegration, EngineCategory::ThemeFramework] {
            let s = category.to_string();
            assert_eq!(EngineCategory::from_str(&s).unwrap(), category);
        }
    }

    #[test]
    fn category_serializes_as_short_name() {
        let json = serde_json::to_string(&EngineCategory::PluginIntegration).unwrap();
        assert_eq!(json, "\"plugin\"");
    }

    #[test]
    fn selection_absent_means_auto() {
        assert_eq!(EngineSelection::from_key(None), EngineSelection::Auto);
        assert_eq!(EngineSelection::from_key(Some("")), EngineSelection::Auto);
        assert_eq!(EngineSelection::from_key(Some("auto")), EngineSelection::Auto);
    }

    #[test]
    fn selection_round_trips_engine_ids() {
        let sel = EngineSelection::from_key(Some("woocommerce"));
        assert_eq!(sel, EngineSelection::Engine("woocommerce".into()));
        assert_eq!(sel.key(), "woocommerce");
    }

    #[test]
    fn disabled_sentinel_is_recognized() {
        assert_eq!(
            EngineSelection::from_key(Some("disabled")),
            EngineSelection::Disabled
        );
    }
}
