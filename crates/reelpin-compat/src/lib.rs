// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in compatibility adapters for known host extensions.
//!
//! One module per plugin integration (WooCommerce, Elementor, Astra Pro,
//! Salient Core) plus a generic theme-framework adapter, and the catalog
//! functions that assemble them into registry descriptor tables.

pub mod astra;
pub mod catalog;
pub mod elementor;
pub mod salient;
pub mod theme;
pub mod woocommerce;

pub use catalog::{builtin_plugin_engines, builtin_theme_engines};
