// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Reelpin compatibility framework.

use thiserror::Error;

use crate::types::EngineCategory;

/// The primary error type used across the Reelpin registry, activation,
/// and settings-schema operations.
#[derive(Debug, Error)]
pub enum ReelpinError {
    /// A second engine descriptor was registered under an already-taken id.
    /// Fatal to that registration call only; the registry is unchanged.
    #[error("duplicate engine id `{id}` in {category} registry")]
    DuplicateEngineId {
        category: EngineCategory,
        id: String,
    },

    /// An adapter factory failed while constructing its adapter. Non-fatal
    /// to the activation pass; the activation slot keeps its prior occupant.
    #[error("failed to construct adapter for engine `{engine_id}`: {source}")]
    AdapterConstruction {
        engine_id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Extension hooks introduced two persistable fields with the same id.
    /// Fatal to the schema build; the section must not render.
    #[error("settings schema conflict in section `{section}`: duplicate field id `{field_id}`")]
    SchemaConflict { section: String, field_id: String },

    /// Options backend errors (file unreadable, serialization failure).
    #[error("options store error: {message}")]
    Options {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_engine_id_names_category_and_id() {
        let err = ReelpinError::DuplicateEngineId {
            category: EngineCategory::PluginIntegration,
            id: "woocommerce".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("woocommerce"));
        assert!(msg.contains("plugin"));
    }

    #[test]
    fn adapter_construction_carries_source() {
        let err = ReelpinError::AdapterConstruction {
            engine_id: "elementor".into(),
            source: Box::new(std::io::Error::other("boom")),
        };
        assert!(err.to_string().contains("elementor"));
        assert!(err.to_string().contains("boom"));
    }
}
