// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative settings-schema engine.
//!
//! A [`SettingsSection`] describes its field sequence from live state (the
//! engine registry, the options store, the host, the licensing flag). The
//! [`SettingsSchema`] builds that sequence on every request and runs it
//! through the two chained extension hooks: the whole-domain transform
//! first, then the section-scoped one. Sequences are never cached or
//! persisted; they must reflect the state at build time.

use std::collections::{HashMap, HashSet};

use reelpin_core::{HostEnv, ReelpinError};
use reelpin_engine::EngineRegistry;
use reelpin_hooks::FilterChain;

use crate::field::SettingsField;
use crate::options::OptionsStore;

/// Live state a section builds its fields from.
pub struct SchemaContext<'a> {
    pub registry: &'a EngineRegistry,
    pub options: &'a OptionsStore,
    pub host: &'a dyn HostEnv,
    /// Supplied by the external licensing collaborator.
    pub premium_active: bool,
}

/// A named, orderable group of fields within the settings domain.
pub trait SettingsSection {
    fn id(&self) -> &str;

    fn label(&self) -> &str;

    /// The built-in field sequence, before extension hooks run.
    fn fields(&self, ctx: &SchemaContext<'_>) -> Vec<SettingsField>;
}

/// Builds field sequences and applies extension hooks with a conflict guard.
pub struct SettingsSchema {
    domain_hook: FilterChain<Vec<SettingsField>>,
    section_hooks: HashMap<String, FilterChain<Vec<SettingsField>>>,
}

impl SettingsSchema {
    pub fn new() -> Self {
        Self {
            domain_hook: FilterChain::new("settings_fields"),
            section_hooks: HashMap::new(),
        }
    }

    /// The transform applied to every section's field sequence.
    pub fn domain_hook_mut(&mut self) -> &mut FilterChain<Vec<SettingsField>> {
        &mut self.domain_hook
    }

    /// The transform applied only to the named section, after the domain
    /// hook.
    pub fn section_hook_mut(&mut self, section_id: &str) -> &mut FilterChain<Vec<SettingsField>> {
        self.section_hooks
            .entry(section_id.to_string())
            .or_insert_with(|| FilterChain::new("settings_fields_section"))
    }

    /// Build the section's field sequence from live state.
    ///
    /// Fails with `SchemaConflict` if the hooks leave two persistable
    /// fields sharing an id; the caller must then not render the section at
    /// all rather than show a possibly-corrupt field list.
    pub fn build(
        &self,
        section: &dyn SettingsSection,
        ctx: &SchemaContext<'_>,
    ) -> Result<Vec<SettingsField>, ReelpinError> {
        let fields = section.fields(ctx);
        let fields = self.domain_hook.apply(fields);
        let fields = match self.section_hooks.get(section.id()) {
            Some(hook) => hook.apply(fields),
            None => fields,
        };

        let mut seen = HashSet::new();
        for field in &fields {
            if field.field_type.is_persistable() && !seen.insert(field.id.as_str()) {
                return Err(ReelpinError::SchemaConflict {
                    section: section.id().to_string(),
                    field_id: field.id.clone(),
                });
            }
        }

        Ok(fields)
    }
}

impl Default for SettingsSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;
    use reelpin_core::{EngineCategory, StaticHostEnv};

    struct FixedSection {
        fields: Vec<SettingsField>,
    }

    impl SettingsSection for FixedSection {
        fn id(&self) -> &str {
            "fixed"
        }

        fn label(&self) -> &str {
            "Fixed"
        }

        fn fields(&self, _ctx: &SchemaContext<'_>) -> Vec<SettingsField> {
            self.fields.clone()
        }
    }

    fn context_parts() -> (EngineRegistry, OptionsStore, StaticHostEnv) {
        (
            EngineRegistry::new(EngineCategory::ThemeFramework),
            OptionsStore::in_memory(),
            StaticHostEnv::new(),
        )
    }

    #[test]
    fn hooks_apply_domain_first_then_section() {
        let (registry, options, host) = context_parts();
        let ctx = SchemaContext {
            registry: &registry,
            options: &options,
            host: &host,
            premium_active: false,
        };

        let mut schema = SettingsSchema::new();
        schema.domain_hook_mut().add(|mut fields: Vec<SettingsField>| {
            fields.push(SettingsField::checkbox("from-domain", "", ""));
            fields
        });
        schema.section_hook_mut("fixed").add(|mut fields: Vec<SettingsField>| {
            fields.push(SettingsField::checkbox("from-section", "", ""));
            fields
        });

        let section = FixedSection { fields: vec![] };
        let built = schema.build(&section, &ctx).unwrap();
        let ids: Vec<&str> = built.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["from-domain", "from-section"]);
    }

    #[test]
    fn section_hook_does_not_leak_to_other_sections() {
        let (registry, options, host) = context_parts();
        let ctx = SchemaContext {
            registry: &registry,
            options: &options,
            host: &host,
            premium_active: false,
        };

        let mut schema = SettingsSchema::new();
        schema.section_hook_mut("other").add(|mut fields: Vec<SettingsField>| {
            fields.push(SettingsField::checkbox("stray", "", ""));
            fields
        });

        let section = FixedSection { fields: vec![] };
        assert!(schema.build(&section, &ctx).unwrap().is_empty());
    }

    #[test]
    fn duplicate_persistable_id_fails_the_build() {
        let (registry, options, host) = context_parts();
        let ctx = SchemaContext {
            registry: &registry,
            options: &options,
            host: &host,
            premium_active: false,
        };

        let mut schema = SettingsSchema::new();
        schema.domain_hook_mut().add(|mut fields: Vec<SettingsField>| {
            fields.push(SettingsField::checkbox("video_autoplay", "", ""));
            fields
        });

        let section = FixedSection {
            fields: vec![SettingsField::checkbox("video_autoplay", "", "")],
        };
        let err = schema.build(&section, &ctx).unwrap_err();
        assert!(matches!(err, ReelpinError::SchemaConflict { ref field_id, .. } if field_id == "video_autoplay"));
    }

    #[test]
    fn repeated_marker_ids_are_not_conflicts() {
        let (registry, options, host) = context_parts();
        let ctx = SchemaContext {
            registry: &registry,
            options: &options,
            host: &host,
            premium_active: false,
        };

        let schema = SettingsSchema::new();
        let section = FixedSection {
            fields: vec![
                SettingsField::section_title("group"),
                SettingsField::section_end("group"),
            ],
        };
        assert_eq!(schema.build(&section, &ctx).unwrap().len(), 2);
    }

    #[test]
    fn build_is_idempotent_for_unchanged_inputs() {
        let (registry, mut options, host) = context_parts();
        options.set("video_autoplay", OptionValue::Bool(true)).unwrap();
        let ctx = SchemaContext {
            registry: &registry,
            options: &options,
            host: &host,
            premium_active: true,
        };

        let schema = SettingsSchema::new();
        let section = FixedSection {
            fields: vec![
                SettingsField::checkbox("video_autoplay", "Enable Video Autoplay", ""),
                SettingsField::select("active-engine", "Set engine"),
            ],
        };

        let first = schema.build(&section, &ctx).unwrap();
        let second = schema.build(&section, &ctx).unwrap();
        assert_eq!(first, second);
    }
}
