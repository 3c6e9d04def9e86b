//! In-memory preference source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::listeners::Listeners;
use super::traits::{
    PreferenceChange, PreferenceListener, PreferenceResult, PreferenceSource, Subscription,
};

/// In-memory preferences for testing and embedding
///
/// Fully read-write. Listeners are notified on the calling thread, after the
/// map lock is released, and only when a value actually changes.
///
/// # Example
///
/// ```
/// use shlog_core::prefs::{MemoryPreferences, PreferenceSource};
///
/// let prefs = MemoryPreferences::new();
/// prefs.subscribe(Box::new(|change| println!("{} changed", change.key)));
/// prefs.set("debug", "true").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
    listeners: Listeners,
}

impl MemoryPreferences {
    /// Create a new empty preference store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial values (no notifications are sent)
    pub fn with_values(initial: HashMap<String, String>) -> Self {
        Self {
            values: RwLock::new(initial),
            listeners: Listeners::new(),
        }
    }

    /// Stop delivering changes to a listener
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.listeners.remove(subscription)
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(&self, key: &str, value: Option<&str>) {
        let changed = {
            let mut values = self.values.write();
            let current = values.get(key).map(String::as_str);
            if current == value {
                false
            } else {
                match value {
                    Some(v) => {
                        values.insert(key.to_string(), v.to_string());
                    }
                    None => {
                        values.remove(key);
                    }
                }
                true
            }
        };

        if changed {
            self.listeners
                .notify(&PreferenceChange::new(key, value.map(str::to_string)));
        }
    }
}

impl PreferenceSource for MemoryPreferences {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.update(key, Some(value));
        Ok(())
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        self.update(key, None);
        Ok(())
    }

    fn subscribe(&self, listener: PreferenceListener) -> Subscription {
        self.listeners.add(listener)
    }
}
