// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Options store, declarative settings schema, and settings persistence.
//!
//! Field sequences are rebuilt on every schema request from live registry
//! and options state; only the options store itself is durable. Extension
//! code reshapes field sequences through the schema's filter hooks and
//! observes saves through the page's action hook.

pub mod field;
pub mod general;
pub mod options;
pub mod page;
pub mod schema;

pub use field::{FieldType, SettingsField};
pub use general::{GeneralSection, ACTIVE_ENGINE_KEY};
pub use options::{MemoryBackend, OptionValue, OptionsBackend, OptionsStore, TomlFileBackend};
pub use page::{RawValue, SaveError, SectionSaved, SettingsPage, Submission};
pub use schema::{SchemaContext, SettingsSchema, SettingsSection};
