// SPDX-FileCopyrightText: 2026 Reelpin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered chains of notification observers.
//!
//! An [`ActionChain`] carries one-way events out of the core to external
//! collaborators (the "settings updated" notification). Observers receive a
//! shared reference to the event and cannot alter it.

use tracing::debug;

/// An observer registered on an [`ActionChain`].
pub type Action<E> = Box<dyn Fn(&E) + Send + Sync>;

/// An ordered list of observers notified with events of type `E`.
pub struct ActionChain<E> {
    name: &'static str,
    actions: Vec<Action<E>>,
}

impl<E> ActionChain<E> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            actions: Vec::new(),
        }
    }

    /// Register an observer at the end of the chain.
    pub fn add<F>(&mut self, action: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.actions.push(Box::new(action));
    }

    /// Notify every registered observer, in registration order.
    pub fn emit(&self, event: &E) {
        if !self.actions.is_empty() {
            debug!(hook = self.name, count = self.actions.len(), "emitting action");
        }
        for action in &self.actions {
            action(event);
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<E> std::fmt::Debug for ActionChain<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionChain")
            .field("name", &self.name)
            .field("actions", &self.actions.len())
            .finish()
    }
}
