// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for adapters and host environment probing.

pub mod adapter;
pub mod host;

pub use adapter::{AdapterFactory, CompatAdapter};
pub use host::{HostEnv, StaticHostEnv};
