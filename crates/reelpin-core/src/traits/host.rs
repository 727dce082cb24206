// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host environment capability probing.
//!
//! Detection predicates need to ask the hosting CMS which optional
//! extensions are loaded. That introspection is abstracted behind [`HostEnv`]
//! so the registry stays decoupled from any specific host mechanism, and so
//! tests and the CLI can describe an environment explicitly.

use std::collections::BTreeSet;

/// A read-only view of the host application's capabilities.
///
/// Implementations must be cheap and side-effect-free; detection predicates
/// may query them repeatedly.
pub trait HostEnv: Send + Sync {
    /// Whether the named extension symbol (class/module marker) is loaded.
    fn symbol_loaded(&self, symbol: &str) -> bool;

    /// Content types the host exposes for featured-video support, as
    /// `(id, plural label)` pairs in the host's own order.
    fn content_types(&self) -> Vec<(String, String)>;
}

/// A fixed snapshot of host capabilities.
///
/// Used by tests and by the CLI, where the host environment is described in
/// configuration rather than probed live.
#[derive(Debug, Clone, Default)]
pub struct StaticHostEnv {
    symbols: BTreeSet<String>,
    content_types: Vec<(String, String)>,
}

impl StaticHostEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given loaded symbols and no content types.
    pub fn with_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            content_types: Vec::new(),
        }
    }

    /// Add a content type the host supports.
    pub fn add_content_type(&mut self, id: impl Into<String>, label: impl Into<String>) {
        self.content_types.push((id.into(), label.into()));
    }
}

impl HostEnv for StaticHostEnv {
    fn symbol_loaded(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    fn content_types(&self) -> Vec<(String, String)> {
        self.content_types.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_env_reports_declared_symbols() {
        let env = StaticHostEnv::with_symbols(["WooCommerce", "Elementor\\Plugin"]);
        assert!(env.symbol_loaded("WooCommerce"));
        assert!(env.symbol_loaded("Elementor\\Plugin"));
        assert!(!env.symbol_loaded("Salient_Core"));
    }

    #[test]
    fn content_types_preserve_insertion_order() {
        let mut env = StaticHostEnv::new();
        env.add_content_type("post", "Posts");
        env.add_content_type("page", "Pages");
        env.add_content_type("product", "Products");
        let types = env.content_types();
        assert_eq!(
            types.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>(),
            vec!["post", "page", "product"]
        );
    }
}
