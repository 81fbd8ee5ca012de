//! Callback registry with drop-to-unsubscribe handles.

use super::ThemeMode;
use parking_lot::Mutex;
use std::{
    collections::BTreeMap,
    sync::{Arc, Weak},
};

/// Observer of theme mode changes.
pub type Callback = Arc<dyn Fn(ThemeMode) + Send + Sync>;

/// Handle returned by a subscription. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel (one-shot sources).
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Unsubscribe now. Same as dropping the handle.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: BTreeMap<u64, Callback>,
}

/// Set of callbacks notified in subscription order.
#[derive(Clone, Default)]
pub(crate) struct Listeners {
    inner: Arc<Mutex<Registry>>,
}

impl Listeners {
    pub fn add(&self, callback: Callback) -> Subscription {
        let id = {
            let mut registry = self.inner.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.callbacks.insert(id, callback);
            id
        };

        let weak: Weak<Mutex<Registry>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.lock().callbacks.remove(&id);
            }
        })
    }

    /// Call every callback with `mode`. The registry lock is not held while
    /// callbacks run, so they may subscribe or unsubscribe.
    pub fn notify(&self, mode: ThemeMode) {
        let callbacks: Vec<Callback> = self.inner.lock().callbacks.values().cloned().collect();
        for callback in callbacks {
            callback(mode);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().callbacks.len()
    }
}
