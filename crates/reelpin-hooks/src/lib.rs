// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extension points for the Reelpin compatibility framework.
//!
//! External code customizes Reelpin through two kinds of hooks, both
//! explicit ordered chains rather than a global event bus:
//!
//! - [`FilterChain`]: pure transforms over a value, applied in registration
//!   order at a fixed call site (engine-descriptor registration, settings
//!   field sequences).
//! - [`ActionChain`]: one-way notifications to external observers (the
//!   per-section "settings updated" event).

pub mod action;
pub mod filter;

pub use action::ActionChain;
pub use filter::FilterChain;
