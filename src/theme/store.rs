//! Shared theme state holder.

use super::{
    STORAGE_KEY, ThemeMode,
    detector::ThemeDetector,
    storage::{KeyValueStorage, StorageError},
    subscription::{Callback, Listeners, Subscription},
};
use crate::log;
use parking_lot::Mutex;
use std::{collections::VecDeque, sync::Arc};

#[derive(Debug, Clone, Copy)]
struct ThemeState {
    mode: ThemeMode,
    /// Set once the detector has reported.
    resolved: bool,
}

/// Transitions waiting to reach the listeners, in commit order.
#[derive(Debug, Default)]
struct Outbox {
    pending: VecDeque<ThemeMode>,
    /// A thread is currently delivering `pending`.
    draining: bool,
}

/// Current theme mode, shared by handle.
///
/// Starts as [`ThemeMode::Dark`] and unresolved. Each detector report
/// replaces the mode unconditionally (without persisting it); [`toggle`]
/// flips the mode and persists the new value under [`STORAGE_KEY`].
///
/// Subscribers see transitions in the order they were committed, even when
/// toggles race across threads. Callbacks run with no lock held and may
/// call back into the store; a transition they cause is delivered after
/// the current one.
///
/// [`toggle`]: Self::toggle
pub struct ThemeStore {
    state: Mutex<ThemeState>,
    storage: Arc<dyn KeyValueStorage>,
    listeners: Listeners,
    outbox: Mutex<Outbox>,
    detector: Mutex<Option<Subscription>>,
}

impl ThemeStore {
    /// Create a store and subscribe it to `detector`.
    ///
    /// The detector subscription lives as long as the store.
    pub fn mount(detector: &dyn ThemeDetector, storage: Arc<dyn KeyValueStorage>) -> Arc<Self> {
        let store = Arc::new(Self {
            state: Mutex::new(ThemeState {
                mode: ThemeMode::default(),
                resolved: false,
            }),
            storage,
            listeners: Listeners::default(),
            outbox: Mutex::new(Outbox::default()),
            detector: Mutex::new(None),
        });

        let weak = Arc::downgrade(&store);
        let subscription = detector.on_change(Arc::new(move |mode: ThemeMode| {
            if let Some(store) = weak.upgrade() {
                store.apply_detected(mode);
            }
        }));
        *store.detector.lock() = Some(subscription);

        store
    }

    /// Current mode.
    pub fn theme(&self) -> ThemeMode {
        self.state.lock().mode
    }

    /// Whether the detector has reported at least once. Until then
    /// [`theme`](Self::theme) is the dark default, not a final value.
    pub fn is_resolved(&self) -> bool {
        self.state.lock().resolved
    }

    /// Flip the mode and persist the new value.
    ///
    /// The flip reads the mode under the same lock that commits it, so
    /// back-to-back toggles always see each other. If the storage write
    /// fails the mode is left unchanged and the error is returned.
    pub fn toggle(&self) -> Result<ThemeMode, StorageError> {
        let next = {
            let mut state = self.state.lock();
            let next = state.mode.toggled();
            self.storage.set(STORAGE_KEY, next.as_str())?;
            state.mode = next;
            self.outbox.lock().pending.push_back(next);
            next
        };

        log!("theme"; "switched to {next}");
        self.deliver();
        Ok(next)
    }

    /// Observe every transition (detector report or toggle).
    pub fn subscribe(&self, callback: Callback) -> Subscription {
        self.listeners.add(callback)
    }

    fn apply_detected(&self, mode: ThemeMode) {
        {
            let mut state = self.state.lock();
            state.mode = mode;
            state.resolved = true;
            self.outbox.lock().pending.push_back(mode);
        }
        self.deliver();
    }

    /// Drain the outbox unless another call is already draining it, in
    /// which case that call delivers what was queued here.
    fn deliver(&self) {
        {
            let mut outbox = self.outbox.lock();
            if outbox.draining {
                return;
            }
            outbox.draining = true;
        }

        loop {
            let next = {
                let mut outbox = self.outbox.lock();
                match outbox.pending.pop_front() {
                    Some(mode) => mode,
                    None => {
                        outbox.draining = false;
                        return;
                    }
                }
            };
            self.listeners.notify(next);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = *self.state.lock();
        f.debug_struct("ThemeStore")
            .field("mode", &state.mode)
            .field("resolved", &state.resolved)
            .finish_non_exhaustive()
    }
}
