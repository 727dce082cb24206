// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One unit of a settings schema: either a persistable input or a pure
//! layout marker.
//!
//! Fields are produced as an ordered sequence; order is significant for
//! rendering and for grouping via `SectionTitle`/`SectionEnd` marker pairs
//! that bound a visual section.

use strum::{Display, EnumString};

use crate::options::OptionValue;

/// The closed set of field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum FieldType {
    /// Free-form descriptive block above a group. Not persisted.
    #[strum(serialize = "content")]
    Content,
    /// Opens a visual group. Not persisted.
    #[strum(serialize = "title")]
    SectionTitle,
    /// Closes the visual group opened by the matching `SectionTitle`.
    #[strum(serialize = "sectionend")]
    SectionEnd,
    /// Single boolean toggle. Absent on submission means unchecked.
    #[strum(serialize = "checkbox")]
    Checkbox,
    /// Set of boolean toggles over a fixed option list. Absent means empty.
    #[strum(serialize = "multi-checkbox")]
    MultiCheckbox,
    /// Single choice from a fixed option list, stored as its option key.
    #[strum(serialize = "select")]
    Select,
    /// Read-only display of a resolved value. Not persisted.
    #[strum(serialize = "status")]
    Status,
}

impl FieldType {
    /// Whether values of this field are written to the options store.
    pub fn is_persistable(self) -> bool {
        matches!(self, Self::Checkbox | Self::MultiCheckbox | Self::Select)
    }

    /// Whether this field only bounds a visual group.
    pub fn is_marker(self) -> bool {
        matches!(self, Self::SectionTitle | Self::SectionEnd)
    }
}

/// A settings field description, as consumed by the rendering collaborator
/// and by [`crate::page::SettingsPage`].
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsField {
    pub id: String,
    pub field_type: FieldType,
    pub title: String,
    pub description: String,
    /// Declared default, also the fallback persisted when a non-checkbox
    /// submission omits the field.
    pub default: Option<OptionValue>,
    /// `(option key, display label)` pairs for `Select`/`MultiCheckbox`.
    pub options: Vec<(String, String)>,
    /// `false` renders the field disabled/promotional; its value is still
    /// never persisted while disabled.
    pub enabled: bool,
    /// Resolved display value for `Status` fields, and the current
    /// selection for `Select` fields.
    pub current: Option<String>,
    /// Optional styling hint for the rendering collaborator.
    pub css_class: Option<String>,
}

impl SettingsField {
    fn base(id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            field_type,
            title: String::new(),
            description: String::new(),
            default: None,
            options: Vec::new(),
            enabled: true,
            current: None,
            css_class: None,
        }
    }

    pub fn content(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::base(id, FieldType::Content)
        }
    }

    pub fn section_title(id: impl Into<String>) -> Self {
        Self::base(id, FieldType::SectionTitle)
    }

    pub fn section_end(id: impl Into<String>) -> Self {
        Self::base(id, FieldType::SectionEnd)
    }

    pub fn checkbox(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            default: Some(OptionValue::Bool(false)),
            ..Self::base(id, FieldType::Checkbox)
        }
    }

    pub fn multi_checkbox(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default: Some(OptionValue::keys(Vec::<String>::new())),
            ..Self::base(id, FieldType::MultiCheckbox)
        }
    }

    pub fn select(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::base(id, FieldType::Select)
        }
    }

    pub fn status(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::base(id, FieldType::Status)
        }
    }

    pub fn with_default(mut self, default: OptionValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_options(mut self, options: Vec<(String, String)>) -> Self {
        self.options = options;
        self
    }

    pub fn with_current(mut self, current: impl Into<String>) -> Self {
        self.current = Some(current.into());
        self
    }

    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = Some(class.into());
        self
    }

    /// Mark the field disabled/promotional.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn only_input_types_are_persistable() {
        assert!(FieldType::Checkbox.is_persistable());
        assert!(FieldType::MultiCheckbox.is_persistable());
        assert!(FieldType::Select.is_persistable());
        assert!(!FieldType::Content.is_persistable());
        assert!(!FieldType::Status.is_persistable());
        assert!(!FieldType::SectionTitle.is_persistable());
        assert!(!FieldType::SectionEnd.is_persistable());
    }

    #[test]
    fn field_type_names_match_the_wire_form() {
        assert_eq!(FieldType::MultiCheckbox.to_string(), "multi-checkbox");
        assert_eq!(FieldType::SectionEnd.to_string(), "sectionend");
        assert_eq!(FieldType::from_str("title").unwrap(), FieldType::SectionTitle);
    }

    #[test]
    fn checkbox_defaults_to_unchecked() {
        let field = SettingsField::checkbox("video_autoplay", "Enable Video Autoplay", "");
        assert_eq!(field.default, Some(OptionValue::Bool(false)));
        assert!(field.enabled);
    }

    #[test]
    fn disabled_builder_flags_promotional_fields() {
        let field = SettingsField::select("promo-global-aspect-ratio", "Video Aspect Ratio")
            .with_default(OptionValue::text("sixteen-nine"))
            .disabled();
        assert!(!field.enabled);
        assert_eq!(field.default, Some(OptionValue::text("sixteen-nine")));
    }
}
