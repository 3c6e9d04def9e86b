//! Listener bookkeeping shared by the writable sources

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::traits::{PreferenceChange, PreferenceListener, Subscription};

type ListenerFn = Arc<dyn Fn(&PreferenceChange) + Send + Sync>;

/// Registered change listeners
///
/// Listeners are called outside the internal lock, so a callback may read
/// from (or subscribe to) the source that notified it.
#[derive(Default)]
pub struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<Vec<(u64, ListenerFn)>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: PreferenceListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.lock().push((id, Arc::from(listener)));
        Subscription(id)
    }

    /// Drop a listener; returns false if it was not registered
    pub fn remove(&self, subscription: Subscription) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(id, _)| *id != subscription.0);
        entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn notify(&self, change: &PreferenceChange) {
        let snapshot: Vec<ListenerFn> = self
            .entries
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(change);
        }
    }

    pub fn notify_all(&self, changes: &[PreferenceChange]) {
        for change in changes {
            self.notify(change);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.len()).finish()
    }
}
