// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable key/value configuration store with typed values and defaults.
//!
//! The store is a thin layer over a swappable [`OptionsBackend`]: the
//! storage medium (in-memory map, TOML file, the host's own option table) is
//! not part of the contract. Reads of an absent key fall back to the
//! declared default for that key and never fail; type checking of written
//! values is the settings page's job.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use reelpin_core::ReelpinError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::SettingsField;

/// A typed option value: boolean, string, or set-of-strings.
///
/// Enum-like selections are stored as plain strings whose validity is the
/// schema's concern. Serialized untagged so the TOML backend reads naturally
/// (`video_autoplay = true`, `active-engine = "auto"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    Keys(BTreeSet<String>),
}

impl OptionValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_keys(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Keys(keys) => Some(keys),
            _ => None,
        }
    }
}

/// Backing storage contract: `read` returns the raw stored value or absent,
/// `write` persists one key. Consistency across processes is the backing
/// medium's concern, not this crate's.
pub trait OptionsBackend: Send + Sync {
    fn read(&self, key: &str) -> Option<OptionValue>;
    fn write(&mut self, key: &str, value: OptionValue) -> Result<(), ReelpinError>;
}

/// Volatile in-memory backend, for tests and ephemeral hosts.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, OptionValue>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionsBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<OptionValue> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: OptionValue) -> Result<(), ReelpinError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// TOML-file backend: the whole option table lives in one flat file,
/// rewritten on every store. Suits the small, rarely-written option sets
/// this system persists.
#[derive(Debug)]
pub struct TomlFileBackend {
    path: PathBuf,
    entries: BTreeMap<String, OptionValue>,
}

impl TomlFileBackend {
    /// Open the backend, loading existing entries. A missing file is an
    /// empty table, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ReelpinError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ReelpinError::Options {
                message: format!("options file `{}` is not valid TOML", path.display()),
                source: Some(Box::new(e)),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(ReelpinError::Options {
                    message: format!("cannot read options file `{}`", path.display()),
                    source: Some(Box::new(e)),
                });
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ReelpinError> {
        let content = toml::to_string(&self.entries).map_err(|e| ReelpinError::Options {
            message: "failed to serialize options table".to_string(),
            source: Some(Box::new(e)),
        })?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ReelpinError::Options {
                message: format!("cannot create options directory `{}`", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }
        std::fs::write(&self.path, content).map_err(|e| ReelpinError::Options {
            message: format!("cannot write options file `{}`", self.path.display()),
            source: Some(Box::new(e)),
        })
    }
}

impl OptionsBackend for TomlFileBackend {
    fn read(&self, key: &str) -> Option<OptionValue> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: OptionValue) -> Result<(), ReelpinError> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }
}

/// The options store: backend plus the defaults declared by settings
/// schemas. `get` never fails; an unset key yields its declared default.
pub struct OptionsStore {
    backend: Box<dyn OptionsBackend>,
    defaults: HashMap<String, OptionValue>,
}

impl OptionsStore {
    pub fn new(backend: Box<dyn OptionsBackend>) -> Self {
        Self {
            backend,
            defaults: HashMap::new(),
        }
    }

    /// Store over a fresh in-memory backend.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// Declare the default returned for `key` while it has no stored value.
    pub fn declare_default(&mut self, key: impl Into<String>, value: OptionValue) {
        self.defaults.insert(key.into(), value);
    }

    /// Declare defaults for every persistable field in a schema.
    pub fn declare_defaults(&mut self, fields: &[SettingsField]) {
        for field in fields {
            if field.field_type.is_persistable() {
                if let Some(default) = &field.default {
                    self.declare_default(field.id.clone(), default.clone());
                }
            }
        }
    }

    /// Read a key: stored value, else declared default, else `None`.
    pub fn get(&self, key: &str) -> Option<OptionValue> {
        self.backend
            .read(key)
            .or_else(|| self.defaults.get(key).cloned())
    }

    /// Read a key as text, if set (or defaulted) to a string.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_text().map(str::to_string))
    }

    /// Read a key as a boolean, treating absent-without-default as `false`.
    pub fn get_flag(&self, key: &str) -> bool {
        self.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
    }

    /// Persist one key. Type agreement with the field's declared schema
    /// type is validated upstream by the settings page.
    pub fn set(&mut self, key: &str, value: OptionValue) -> Result<(), ReelpinError> {
        debug!(key, "options store write");
        self.backend.write(key, value)
    }
}

impl std::fmt::Debug for OptionsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionsStore")
            .field("defaults", &self.defaults.len())
            .finish()
    }
}
