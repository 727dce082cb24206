// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `reelpin settings` command implementation.
//!
//! Lists the general section's schema, reads single options, and writes
//! values through the same validation path the host's settings page uses.

use reelpin_core::ReelpinError;
use reelpin_settings::{
    FieldType, GeneralSection, OptionValue, OptionsStore, RawValue, SchemaContext, SettingsField,
    SettingsPage, SettingsSchema, Submission,
};
use serde::Serialize;

use crate::runtime::Runtime;

/// Build the general section's fields against live runtime state and
/// declare their defaults on the store.
pub fn build_general_fields(
    runtime: &Runtime,
    store: &mut OptionsStore,
    premium_active: bool,
) -> Result<Vec<SettingsField>, ReelpinError> {
    let schema = SettingsSchema::new();
    let ctx = SchemaContext {
        registry: &runtime.themes.registry,
        options: store,
        host: &runtime.host,
        premium_active,
    };
    let fields = schema.build(&GeneralSection, &ctx)?;
    store.declare_defaults(&fields);
    Ok(fields)
}

/// One field's row in the structured `--json` listing.
#[derive(Debug, Serialize)]
struct FieldRow {
    id: String,
    field_type: String,
    title: String,
    value: Option<OptionValue>,
    enabled: bool,
}

/// Run `reelpin settings list`.
pub fn run_list(
    runtime: &Runtime,
    store: &mut OptionsStore,
    premium_active: bool,
    json: bool,
) -> Result<(), ReelpinError> {
    let fields = build_general_fields(runtime, store, premium_active)?;

    if json {
        let rows: Vec<FieldRow> = fields
            .iter()
            .filter(|f| !f.field_type.is_marker())
            .map(|f| FieldRow {
                id: f.id.clone(),
                field_type: f.field_type.to_string(),
                title: f.title.clone(),
                value: if f.field_type.is_persistable() {
                    store.get(&f.id)
                } else {
                    f.current.clone().map(OptionValue::Text)
                },
                enabled: f.enabled,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    println!();
    println!("  general settings");
    println!("  {}", "-".repeat(35));
    for field in &fields {
        match field.field_type {
            FieldType::SectionTitle | FieldType::SectionEnd => {}
            FieldType::Content => {
                println!();
                println!("  {}", field.title);
            }
            FieldType::Status => {
                println!("    {:28} {}", field.id, field.current.as_deref().unwrap_or("-"));
            }
            _ => {
                let value = store
                    .get(&field.id)
                    .map(format_value)
                    .unwrap_or_else(|| "-".to_string());
                let marker = if field.enabled { "" } else { " (premium)" };
                println!("    {:28} {value}{marker}", field.id);
            }
        }
    }
    println!();

    Ok(())
}

/// Run `reelpin settings get <key>`.
pub fn run_get(
    runtime: &Runtime,
    store: &mut OptionsStore,
    premium_active: bool,
    key: &str,
) -> Result<(), ReelpinError> {
    // Build first so declared defaults back absent keys.
    build_general_fields(runtime, store, premium_active)?;

    match store.get(key) {
        Some(value) => {
            println!("{}", format_value(value));
            Ok(())
        }
        None => Err(ReelpinError::Options {
            message: format!("unknown option key `{key}`"),
            source: None,
        }),
    }
}

/// Run `reelpin settings set <key> <value>`.
///
/// Routes the write through `SettingsPage::save` so coercion and
/// validation match the host's own settings form.
pub fn run_set(
    runtime: &Runtime,
    store: &mut OptionsStore,
    premium_active: bool,
    key: &str,
    value: &str,
) -> Result<(), ReelpinError> {
    let fields = build_general_fields(runtime, store, premium_active)?;

    let field = fields
        .iter()
        .find(|f| f.id == key && f.field_type.is_persistable())
        .ok_or_else(|| ReelpinError::Options {
            message: format!("no persistable field `{key}` in the general section"),
            source: None,
        })?;

    if !field.enabled {
        return Err(ReelpinError::Options {
            message: format!("field `{key}` requires the premium tier"),
            source: None,
        });
    }

    let raw = match field.field_type {
        // Comma-separated keys for set-valued fields.
        FieldType::MultiCheckbox => RawValue::Keys(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => RawValue::Text(value.to_string()),
    };

    let mut submission = Submission::new();
    submission.insert(field.id.clone(), raw);

    let page = SettingsPage::new();
    let errors = page.save("general", None, std::slice::from_ref(field), &submission, store);
    if errors.is_empty() {
        println!("{key} saved");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("error: {error}");
        }
        Err(ReelpinError::Options {
            message: format!("failed to save `{key}`"),
            source: None,
        })
    }
}

fn format_value(value: OptionValue) -> String {
    match value {
        OptionValue::Bool(b) => b.to_string(),
        OptionValue::Text(s) => s,
        OptionValue::Keys(keys) => keys.into_iter().collect::<Vec<_>>().join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::RegistrationHooks;
    use reelpin_config::ReelpinConfig;
    use reelpin_settings::ACTIVE_ENGINE_KEY;

    fn runtime() -> Runtime {
        Runtime::from_config(&ReelpinConfig::default(), &RegistrationHooks::new()).unwrap()
    }

    #[test]
    fn set_then_get_round_trips_through_the_page() {
        let runtime = runtime();
        let mut store = OptionsStore::in_memory();

        run_set(&runtime, &mut store, true, "video_autoplay", "1").unwrap();
        assert_eq!(store.get("video_autoplay"), Some(OptionValue::Bool(true)));
    }

    #[test]
    fn set_rejects_unknown_and_non_persistable_keys() {
        let runtime = runtime();
        let mut store = OptionsStore::in_memory();

        assert!(run_set(&runtime, &mut store, true, "engine-status", "x").is_err());
        assert!(run_set(&runtime, &mut store, true, "nonexistent", "x").is_err());
    }

    #[test]
    fn set_splits_multi_checkbox_values() {
        let runtime = runtime();
        let mut store = OptionsStore::in_memory();

        run_set(&runtime, &mut store, true, "content_types", "post, page").unwrap();
        assert_eq!(
            store.get("content_types"),
            Some(OptionValue::keys(["post", "page"]))
        );
    }

    #[test]
    fn get_falls_back_to_declared_defaults() {
        let runtime = runtime();
        let mut store = OptionsStore::in_memory();

        build_general_fields(&runtime, &mut store, true).unwrap();
        assert_eq!(
            store.get_text(ACTIVE_ENGINE_KEY).as_deref(),
            Some("auto")
        );
    }

    #[test]
    fn promo_fields_cannot_be_written_without_premium() {
        let runtime = runtime();
        let mut store = OptionsStore::in_memory();

        // With premium inactive, the promo select exists but is disabled.
        let result = run_set(
            &runtime,
            &mut store,
            false,
            "promo-global-aspect-ratio",
            "one-one",
        );
        assert!(result.is_err());
        assert_eq!(store.get("promo-global-aspect-ratio"), None);
    }
}
