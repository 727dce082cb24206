// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Reelpin compatibility framework.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Reelpin workspace. The engine registry,
//! compatibility adapters, and settings crates all build on the contracts
//! defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ReelpinError;
pub use traits::{AdapterFactory, CompatAdapter, HostEnv, StaticHostEnv};
pub use types::{EngineCategory, EngineSelection};
