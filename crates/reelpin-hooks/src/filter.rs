// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered chains of pure value transforms.
//!
//! A [`FilterChain`] is the explicit rendition of the host's filter-style
//! extension points: external code registers transforms, and the owning
//! component applies them in registration order at a documented call site.
//! Transforms take the value by move and return the (possibly modified)
//! value; they must not have side effects.

use tracing::debug;

/// A transform registered on a [`FilterChain`].
pub type Filter<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// An ordered list of pure transforms over values of type `T`.
///
/// Registration order is application order. The empty chain is the identity.
pub struct FilterChain<T> {
    name: &'static str,
    filters: Vec<Filter<T>>,
}

impl<T> FilterChain<T> {
    /// Create an empty chain. `name` labels the extension point in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            filters: Vec::new(),
        }
    }

    /// Register a transform at the end of the chain.
    pub fn add<F>(&mut self, filter: F)
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
    }

    /// Run `value` through every registered transform, in order.
    pub fn apply(&self, value: T) -> T {
        if !self.filters.is_empty() {
            debug!(hook = self.name, count = self.filters.len(), "applying filter chain");
        }
        self.filters.iter().fold(value, |acc, f| f(acc))
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl<T> std::fmt::Debug for FilterChain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("name", &self.name)
            .field("filters", &self.filters.len())
            .finish()
    }
}
