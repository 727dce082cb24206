// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings persistence: validating a submission against a schema and
//! writing accepted values through the options store.
//!
//! Each persistable field is validated independently; errors are collected,
//! never short-circuiting, so a section save may partially succeed. The
//! per-section "settings updated" notification fires only after a fully
//! successful save.

use thiserror::Error;
use tracing::debug;

use reelpin_hooks::ActionChain;

use crate::field::{FieldType, SettingsField};
use crate::options::{OptionValue, OptionsStore};

/// Raw value from the external form-rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Bool(bool),
    Keys(Vec<String>),
}

/// Ordered mapping of field id to submitted raw value.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    values: Vec<(String, RawValue)>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: RawValue) {
        self.values.push((field_id.into(), value));
    }

    pub fn get(&self, field_id: &str) -> Option<&RawValue> {
        self.values
            .iter()
            .find(|(id, _)| id == field_id)
            .map(|(_, value)| value)
    }

    pub fn text(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.insert(field_id, RawValue::Text(value.into()));
    }
}

/// Per-field validation failure collected during a save.
#[derive(Debug, Error, PartialEq)]
pub enum SaveError {
    /// A non-checkbox field was omitted and declares no default.
    #[error("missing required value for field `{field_id}`")]
    MissingRequiredValue { field_id: String },

    /// The submitted value cannot be coerced into the field's type.
    #[error("type mismatch for field `{field_id}`: expected {expected}")]
    TypeMismatch {
        field_id: String,
        expected: &'static str,
    },

    /// The options store refused the write.
    #[error("failed to persist field `{field_id}`: {message}")]
    Store { field_id: String, message: String },
}

/// Event emitted once per section after a fully successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSaved {
    pub section_id: String,
    pub subsection_id: Option<String>,
}

/// Validates and persists submitted values against a built schema.
pub struct SettingsPage {
    on_saved: ActionChain<SectionSaved>,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self {
            on_saved: ActionChain::new("settings_updated"),
        }
    }

    /// Observers notified after a fully successful section save.
    pub fn on_saved_mut(&mut self) -> &mut ActionChain<SectionSaved> {
        &mut self.on_saved
    }

    /// Validate `submitted` against `fields` and write accepted values.
    ///
    /// Returns the collected validation errors, empty on full success.
    /// Disabled and non-persistable fields are skipped entirely.
    pub fn save(
        &self,
        section_id: &str,
        subsection_id: Option<&str>,
        fields: &[SettingsField],
        submitted: &Submission,
        store: &mut OptionsStore,
    ) -> Vec<SaveError> {
        let mut errors = Vec::new();

        for field in fields {
            if !field.field_type.is_persistable() || !field.enabled {
                continue;
            }

            let coerced = match coerce(field, submitted.get(&field.id)) {
                Ok(value) => value,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };

            if let Err(err) = store.set(&field.id, coerced) {
                errors.push(SaveError::Store {
                    field_id: field.id.clone(),
                    message: err.to_string(),
                });
            }
        }

        if errors.is_empty() {
            debug!(section = section_id, "settings section saved");
            self.on_saved.emit(&SectionSaved {
                section_id: section_id.to_string(),
                subsection_id: subsection_id.map(str::to_string),
            });
        }

        errors
    }
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce a submitted raw value into the field's declared semantic type.
///
/// Checkbox-likes define an absent-means-unchecked rule; every other type
/// falls back to the declared default and fails only without one.
fn coerce(field: &SettingsField, raw: Option<&RawValue>) -> Result<OptionValue, SaveError> {
    match field.field_type {
        FieldType::Checkbox => match raw {
            None => Ok(OptionValue::Bool(false)),
            Some(RawValue::Bool(b)) => Ok(OptionValue::Bool(*b)),
            Some(RawValue::Text(s)) => parse_flag(s).map(OptionValue::Bool).ok_or_else(|| {
                SaveError::TypeMismatch {
                    field_id: field.id.clone(),
                    expected: "boolean",
                }
            }),
            Some(RawValue::Keys(_)) => Err(SaveError::TypeMismatch {
                field_id: field.id.clone(),
                expected: "boolean",
            }),
        },
        FieldType::MultiCheckbox => match raw {
            None => Ok(OptionValue::keys(Vec::<String>::new())),
            Some(RawValue::Keys(keys)) => Ok(OptionValue::keys(keys.clone())),
            // A single submitted key arrives as plain text.
            Some(RawValue::Text(s)) => Ok(OptionValue::keys([s.clone()])),
            Some(RawValue::Bool(_)) => Err(SaveError::TypeMismatch {
                field_id: field.id.clone(),
                expected: "set of strings",
            }),
        },
        FieldType::Select => match raw {
            Some(RawValue::Text(s)) => Ok(OptionValue::text(s.clone())),
            Some(_) => Err(SaveError::TypeMismatch {
                field_id: field.id.clone(),
                expected: "string",
            }),
            None => field.default.clone().ok_or_else(|| SaveError::MissingRequiredValue {
                field_id: field.id.clone(),
            }),
        },
        // Markers, content, and status fields carry no persisted value.
        FieldType::Content | FieldType::SectionTitle | FieldType::SectionEnd | FieldType::Status => {
            unreachable!("non-persistable field reached coercion")
        }
    }
}

/// The form surface posts checkbox state as "1"/"yes"-style strings.
fn parse_flag(s: &str) -> Option<bool> {
    match s {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn autoplay_field() -> SettingsField {
        SettingsField::checkbox("video_autoplay", "Enable Video Autoplay", "")
    }

    #[test]
    fn checkbox_string_one_persists_true() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let mut submission = Submission::new();
        submission.text("video_autoplay", "1");

        let errors = page.save("general", None, &[autoplay_field()], &submission, &mut store);
        assert!(errors.is_empty());
        assert_eq!(store.get("video_autoplay"), Some(OptionValue::Bool(true)));
    }

    #[test]
    fn omitted_checkbox_persists_false() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        store.set("video_autoplay", OptionValue::Bool(true)).unwrap();

        let errors = page.save(
            "general",
            None,
            &[autoplay_field()],
            &Submission::new(),
            &mut store,
        );
        assert!(errors.is_empty());
        assert_eq!(store.get("video_autoplay"), Some(OptionValue::Bool(false)));
    }

    #[test]
    fn omitted_multi_checkbox_persists_the_empty_set() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let fields = vec![SettingsField::multi_checkbox("content_types", "")];

        let errors = page.save("general", None, &fields, &Submission::new(), &mut store);
        assert!(errors.is_empty());
        assert_eq!(
            store.get("content_types"),
            Some(OptionValue::keys(Vec::<String>::new()))
        );
    }

    #[test]
    fn omitted_select_without_default_is_the_only_error_and_siblings_still_save() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let fields = vec![
            SettingsField::select("required-choice", "Choice"),
            autoplay_field(),
        ];
        let mut submission = Submission::new();
        submission.text("video_autoplay", "1");

        let errors = page.save("general", None, &fields, &submission, &mut store);
        assert_eq!(
            errors,
            vec![SaveError::MissingRequiredValue {
                field_id: "required-choice".to_string()
            }]
        );
        // The failing field does not stop the remaining fields.
        assert_eq!(store.get("video_autoplay"), Some(OptionValue::Bool(true)));
    }

    #[test]
    fn omitted_select_with_default_persists_the_default() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let fields = vec![
            SettingsField::select("active-engine", "Set engine")
                .with_default(OptionValue::text("auto")),
        ];

        let errors = page.save("general", None, &fields, &Submission::new(), &mut store);
        assert!(errors.is_empty());
        assert_eq!(store.get_text("active-engine").as_deref(), Some("auto"));
    }

    #[test]
    fn malformed_checkbox_value_is_a_type_mismatch() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let mut submission = Submission::new();
        submission.text("video_autoplay", "maybe");

        let errors = page.save("general", None, &[autoplay_field()], &submission, &mut store);
        assert_eq!(
            errors,
            vec![SaveError::TypeMismatch {
                field_id: "video_autoplay".to_string(),
                expected: "boolean"
            }]
        );
        assert_eq!(store.get("video_autoplay"), None);
    }

    #[test]
    fn disabled_fields_are_never_persisted() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let fields = vec![
            SettingsField::select("promo-global-aspect-ratio", "Video Aspect Ratio")
                .with_default(OptionValue::text("sixteen-nine"))
                .disabled(),
        ];
        let mut submission = Submission::new();
        submission.text("promo-global-aspect-ratio", "one-one");

        let errors = page.save("general", None, &fields, &submission, &mut store);
        assert!(errors.is_empty());
        assert_eq!(store.get("promo-global-aspect-ratio"), None);
    }

    #[test]
    fn saved_notification_fires_once_per_successful_section() {
        let mut page = SettingsPage::new();
        let seen = Arc::new(AtomicUsize::new(0));
        {
            let seen = Arc::clone(&seen);
            page.on_saved_mut().add(move |event: &SectionSaved| {
                assert_eq!(event.section_id, "general");
                assert_eq!(event.subsection_id.as_deref(), Some("video"));
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }
        let mut store = OptionsStore::in_memory();
        let fields = vec![
            autoplay_field(),
            SettingsField::multi_checkbox("content_types", ""),
        ];

        let errors = page.save("general", Some("video"), &fields, &Submission::new(), &mut store);
        assert!(errors.is_empty());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn saved_notification_is_suppressed_on_any_error() {
        let mut page = SettingsPage::new();
        let seen = Arc::new(AtomicUsize::new(0));
        {
            let seen = Arc::clone(&seen);
            page.on_saved_mut().add(move |_: &SectionSaved| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }
        let mut store = OptionsStore::in_memory();
        let fields = vec![SettingsField::select("required-choice", "Choice")];

        let errors = page.save("general", None, &fields, &Submission::new(), &mut store);
        assert_eq!(errors.len(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn bool_raw_values_pass_straight_through() {
        let page = SettingsPage::new();
        let mut store = OptionsStore::in_memory();
        let mut submission = Submission::new();
        submission.insert("video_autoplay", RawValue::Bool(true));

        let errors = page.save("general", None, &[autoplay_field()], &submission, &mut store);
        assert!(errors.is_empty());
        assert_eq!(store.get("video_autoplay"), Some(OptionValue::Bool(true)));
    }
}
