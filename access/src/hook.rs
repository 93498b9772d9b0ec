//! Unauthorized-response subscription hub.
//!
//! DESIGN
//! ======
//! API clients own one hub and call `notify` whenever a response comes back
//! 401. Session drivers subscribe once when they are constructed; the
//! returned handle deregisters on drop, so the hook's lifetime is the
//! subscriber's lifetime and never a view's mount cycle.

#[cfg(test)]
#[path = "hook_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    callbacks: BTreeMap<u64, Callback>,
}

type Registry = Mutex<Listeners>;

fn lock(registry: &Registry) -> MutexGuard<'_, Listeners> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared registry of "a request came back unauthorized" callbacks.
#[derive(Clone, Default)]
pub struct UnauthorizedHub {
    registry: Arc<Registry>,
}

impl UnauthorizedHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it stays registered until the handle is dropped.
    pub fn subscribe<F>(&self, callback: F) -> UnauthorizedSubscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut listeners = lock(&self.registry);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.callbacks.insert(id, Arc::new(callback));
        UnauthorizedSubscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Run every registered callback.
    pub fn notify(&self) {
        // Snapshot first so callbacks may (un)subscribe without deadlocking.
        let callbacks: Vec<Callback> = lock(&self.registry).callbacks.values().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.registry).callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle for a hub registration; dropping it deregisters the callback.
#[must_use = "dropping the subscription deregisters the callback"]
pub struct UnauthorizedSubscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for UnauthorizedSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).callbacks.remove(&self.id);
        }
    }
}
