// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine registry for one category of host-extension integrations.
//!
//! The `EngineRegistry` stores `EngineDescriptor` records in registration
//! order and answers which ones are currently detectable in the host
//! environment. Registration order is semantically meaningful: the
//! activation pass resolves simultaneous matches by it.

use std::sync::atomic::{AtomicBool, Ordering};

use reelpin_core::{AdapterFactory, EngineCategory, HostEnv, ReelpinError};
use reelpin_hooks::FilterChain;
use tracing::warn;

/// Detection predicate: a boolean capability query over the host
/// environment. Must be pure and safe to call repeatedly.
pub type DetectFn = Box<dyn Fn(&dyn HostEnv) -> bool + Send + Sync>;

/// Immutable record describing one optional host-extension integration:
/// how to identify it, detect it, and construct its adapter.
pub struct EngineDescriptor {
    pub id: String,
    pub title: String,
    pub detect: DetectFn,
    pub factory: Box<dyn AdapterFactory>,
}

impl EngineDescriptor {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        detect: DetectFn,
        factory: Box<dyn AdapterFactory>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            detect,
            factory,
        }
    }

    /// Descriptor whose detection probes for a single loaded host symbol,
    /// the common case for plugin integrations.
    pub fn for_symbol(
        id: impl Into<String>,
        title: impl Into<String>,
        symbol: impl Into<String>,
        factory: Box<dyn AdapterFactory>,
    ) -> Self {
        let symbol = symbol.into();
        Self::new(
            id,
            title,
            Box::new(move |host: &dyn HostEnv| host.symbol_loaded(&symbol)),
            factory,
        )
    }
}

impl std::fmt::Debug for EngineDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}

/// Ordered registry of engine descriptors for one [`EngineCategory`].
///
/// The descriptor set is finalized once: external code may inject additional
/// descriptors through the registration filter chain at construction, and
/// `register` keeps working until the first detection pass. After that the
/// registry is sealed and late registrations are ignored, so the detection
/// list keeps one shape for the registry's whole lifetime.
pub struct EngineRegistry {
    category: EngineCategory,
    descriptors: Vec<EngineDescriptor>,
    sealed: AtomicBool,
}

impl EngineRegistry {
    /// Create an empty registry for the given category.
    pub fn new(category: EngineCategory) -> Self {
        Self {
            category,
            descriptors: Vec::new(),
            sealed: AtomicBool::new(false),
        }
    }

    /// Build a registry from built-in descriptors plus external injections.
    ///
    /// The registration chain runs exactly once, here. Duplicate ids in the
    /// resulting set fail construction with `DuplicateEngineId`.
    pub fn with_descriptors(
        category: EngineCategory,
        builtins: Vec<EngineDescriptor>,
        registration: &FilterChain<Vec<EngineDescriptor>>,
    ) -> Result<Self, ReelpinError> {
        let mut registry = Self::new(category);
        for descriptor in registration.apply(builtins) {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    pub fn category(&self) -> EngineCategory {
        self.category
    }

    /// Append a descriptor, preserving insertion order.
    ///
    /// Fails with `DuplicateEngineId` if the id is already taken. Once the
    /// registry is sealed by the first detection pass, registrations are
    /// ignored (with a warning) instead of reshaping the current snapshot.
    pub fn register(&mut self, descriptor: EngineDescriptor) -> Result<(), ReelpinError> {
        if self.sealed.load(Ordering::Acquire) {
            warn!(
                category = %self.category,
                engine = %descriptor.id,
                "registry already sealed by first detection; ignoring late registration"
            );
            return Ok(());
        }
        if self.descriptors.iter().any(|d| d.id == descriptor.id) {
            return Err(ReelpinError::DuplicateEngineId {
                category: self.category,
                id: descriptor.id,
            });
        }
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Evaluate every descriptor's detection predicate, in registration
    /// order, and return those currently detectable.
    ///
    /// Pure query apart from sealing the registry on first use; cheap to
    /// re-evaluate.
    pub fn detect_active(&self, host: &dyn HostEnv) -> Vec<&EngineDescriptor> {
        self.sealed.store(true, Ordering::Release);
        self.descriptors
            .iter()
            .filter(|d| (d.detect)(host))
            .collect()
    }

    /// All registered descriptors as `(id, title)` pairs, in registration
    /// order, regardless of detection status. Feeds manual-override
    /// selection UIs.
    pub fn get_available(&self) -> Vec<(String, String)> {
        self.descriptors
            .iter()
            .map(|d| (d.id.clone(), d.title.clone()))
            .collect()
    }

    /// Look up a registered engine's title by id.
    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.title.as_str())
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl std::fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("category", &self.category)
            .field("descriptors", &self.descriptors)
            .field("sealed", &self.sealed.load(Ordering::Relaxed))
            .finish()
    }
}
