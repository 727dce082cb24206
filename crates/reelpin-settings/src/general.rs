// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built-in "General" settings section.
//!
//! Groups, in order: the theme-compatibility engine selector with its
//! read-only status, featured-video support per content type, video
//! autoplay, and (while the premium tier is inactive) a disabled
//! promotional aspect-ratio group.

use reelpin_core::EngineSelection;

use crate::field::SettingsField;
use crate::options::OptionValue;
use crate::schema::{SchemaContext, SettingsSection};

/// Option key holding the user's engine selection for this section's
/// category.
pub const ACTIVE_ENGINE_KEY: &str = "active-engine";

/// Content type enabled for featured videos out of the box.
const DEFAULT_CONTENT_TYPE: &str = "post";

pub struct GeneralSection;

impl GeneralSection {
    fn engine_group(ctx: &SchemaContext<'_>) -> Vec<SettingsField> {
        let stored = ctx.options.get_text(ACTIVE_ENGINE_KEY);
        let selection = EngineSelection::from_key(stored.as_deref());
        let engines = ctx.registry.get_available();

        let status_current = match &selection {
            EngineSelection::Auto => "Auto".to_string(),
            EngineSelection::Disabled => "Disabled".to_string(),
            EngineSelection::Engine(id) => ctx
                .registry
                .title_of(id)
                .map(str::to_string)
                .unwrap_or_else(|| id.clone()),
        };
        let status_class = if selection == EngineSelection::Disabled {
            "engine-inactive"
        } else {
            "engine-active"
        };

        vec![
            SettingsField::content(
                "theme-compatibility-intro",
                "Theme Compatibility Engine",
                "If featured videos aren't working as expected in your theme, \
                 set this from the list of supported engines. The default \
                 engine follows the host's standard rules and may not work \
                 for all themes.",
            ),
            SettingsField::section_title("theme_support_title"),
            SettingsField::status("engine-status", "Status")
                .with_default(OptionValue::text("Auto"))
                .with_current(status_current)
                .with_css_class(status_class),
            SettingsField::select(ACTIVE_ENGINE_KEY, "Set engine")
                .with_default(OptionValue::text(EngineSelection::AUTO_KEY))
                .with_options(engines)
                .with_current(selection.key()),
            SettingsField::section_end("theme_support_title"),
        ]
    }

    fn content_types_group(ctx: &SchemaContext<'_>) -> Vec<SettingsField> {
        vec![
            SettingsField::content(
                "enable-content-types",
                "Enable Content Types Support",
                "Select the content types you wish to enable featured video support at.",
            ),
            SettingsField::section_title("content_types_title"),
            SettingsField::multi_checkbox("content_types", "")
                .with_default(OptionValue::keys([DEFAULT_CONTENT_TYPE]))
                .with_options(ctx.host.content_types()),
            SettingsField::section_end("content_types_title"),
        ]
    }

    fn autoplay_group() -> Vec<SettingsField> {
        vec![
            SettingsField::section_title("autoplay_title"),
            SettingsField::checkbox(
                "video_autoplay",
                "Enable Video Autoplay",
                "Autoplay featured videos on page load.",
            ),
            SettingsField::section_end("autoplay_title"),
        ]
    }

    fn aspect_ratio_promo_group() -> Vec<SettingsField> {
        vec![
            SettingsField::content(
                "promo-aspect-ratios",
                "Global Aspect Ratio",
                "Set aspect ratio for featured videos shown sitewide.",
            )
            .disabled(),
            SettingsField::section_title("aspect_ratio_title"),
            SettingsField::select("promo-global-aspect-ratio", "Video Aspect Ratio")
                .with_default(OptionValue::text("sixteen-nine"))
                .with_options(vec![
                    ("sixteen-nine".to_string(), "16:9 (Default)".to_string()),
                    ("one-one".to_string(), "1:1".to_string()),
                    ("three-two".to_string(), "3:2".to_string()),
                    ("four-three".to_string(), "4:3".to_string()),
                ])
                .disabled(),
            SettingsField::section_end("aspect_ratio_title"),
        ]
    }
}

impl SettingsSection for GeneralSection {
    fn id(&self) -> &str {
        "general"
    }

    fn label(&self) -> &str {
        "General"
    }

    fn fields(&self, ctx: &SchemaContext<'_>) -> Vec<SettingsField> {
        let mut fields = Self::engine_group(ctx);
        fields.extend(Self::content_types_group(ctx));
        fields.extend(Self::autoplay_group());
        if !ctx.premium_active {
            fields.extend(Self::aspect_ratio_promo_group());
        }
        fields
    }
}
