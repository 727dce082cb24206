// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine registry and adapter activation for the Reelpin framework.
//!
//! One [`EngineRegistry`]/[`AdapterActivator`] pair exists per
//! [`reelpin_core::EngineCategory`]. The registry holds the ordered
//! descriptor set and answers detection queries; the activator converts a
//! detection result into at most one live [`reelpin_core::CompatAdapter`],
//! exactly once per registry lifetime.

pub mod activator;
pub mod registry;

pub use activator::{Activation, AdapterActivator};
pub use registry::{DetectFn, EngineDescriptor, EngineRegistry};
