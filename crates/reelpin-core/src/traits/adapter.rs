// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base adapter trait and factory contract for compatibility adapters.

use crate::error::ReelpinError;
use crate::types::EngineCategory;

/// The live integration object produced for a detected host extension.
///
/// Adapters are constructed at most once per activation pass, live for the
/// process lifetime inside the activator's slot, and are never explicitly
/// torn down. Integration behavior beyond identity (markup filters, template
/// overrides) belongs to the concrete adapter crates and is not part of this
/// contract.
pub trait CompatAdapter: Send + Sync + 'static {
    /// The engine id this adapter was constructed for.
    fn engine_id(&self) -> &str;

    /// Human-readable engine title.
    fn title(&self) -> &str;

    /// Which registry category this adapter belongs to.
    fn category(&self) -> EngineCategory;
}

/// Constructs a [`CompatAdapter`] for a descriptor once detection matched.
///
/// Factories must not have side effects beyond building the adapter itself.
/// A failing factory aborts activation of that descriptor only.
pub trait AdapterFactory: Send + Sync {
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError>;
}

impl<F> AdapterFactory for F
where
    F: Fn(&str, &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> + Send + Sync,
{
    fn create(&self, engine_id: &str, title: &str) -> Result<Box<dyn CompatAdapter>, ReelpinError> {
        self(engine_id, title)
    }
}
