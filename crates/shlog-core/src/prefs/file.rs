//! File-based preference source (YAML)
//!
//! The file is a flat mapping of keys to scalars:
//!
//! ```yaml
//! debug: true
//! editor: vim
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::listeners::Listeners;
use super::traits::{
    PreferenceChange, PreferenceError, PreferenceListener, PreferenceResult, PreferenceSource,
    Subscription,
};

type PreferenceMap = BTreeMap<String, String>;

/// YAML file-backed preferences
///
/// Writes go straight to disk and notify listeners. Edits made to the file
/// by other processes are picked up with `reload()`, which notifies once per
/// key whose value differs from what this source last saw.
///
/// # Example
///
/// ```no_run
/// use shlog_core::prefs::{FilePreferences, PreferenceSource};
///
/// let prefs = FilePreferences::user();
/// prefs.set("debug", "true").unwrap();
/// ```
pub struct FilePreferences {
    path: PathBuf,
    cache: RwLock<Option<PreferenceMap>>,
    listeners: Listeners,
}

impl FilePreferences {
    /// Create a source for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
            listeners: Listeners::new(),
        }
    }

    /// Create a user-level source (~/.config/shlog/prefs.yaml)
    pub fn user() -> Self {
        // Use XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("shlog").join("prefs.yaml"))
    }

    /// Get the preference file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the preference file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Stop delivering changes to a listener
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.listeners.remove(subscription)
    }

    /// Re-read the file and notify listeners of every changed key
    pub fn reload(&self) -> PreferenceResult<Vec<PreferenceChange>> {
        let changes = {
            let mut cache = self.cache.write();
            let fresh = self.load()?;
            let changes = diff(cache.as_ref(), &fresh);
            *cache = Some(fresh);
            changes
        };

        tracing::trace!(path = %self.path.display(), changed = changes.len(), "reloaded preferences");
        self.listeners.notify_all(&changes);
        Ok(changes)
    }

    /// Export preferences as pretty JSON
    pub fn export_json(&self) -> PreferenceResult<String> {
        let values = self.values()?;
        Ok(serde_json::to_string_pretty(&values)?)
    }

    /// Replace all preferences with the contents of a JSON object
    pub fn import_json(&self, json: &str) -> PreferenceResult<()> {
        let imported: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut values = PreferenceMap::new();
        for (key, value) in imported {
            let value = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => {
                    return Err(PreferenceError::Other(format!(
                        "preference `{}` is not a scalar",
                        key
                    )))
                }
            };
            values.insert(key, value);
        }

        let changes = self.modify(|current| {
            let changes = diff(Some(&*current), &values);
            *current = values;
            changes
        })?;
        self.listeners.notify_all(&changes);
        Ok(())
    }

    /// All preferences currently stored
    pub fn values(&self) -> PreferenceResult<PreferenceMap> {
        if let Some(values) = self.cache.read().as_ref() {
            return Ok(values.clone());
        }

        let mut cache = self.cache.write();
        if cache.is_none() {
            *cache = Some(self.load()?);
        }
        Ok(cache.clone().unwrap_or_default())
    }

    fn load(&self) -> PreferenceResult<PreferenceMap> {
        if !self.path.exists() {
            return Ok(PreferenceMap::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(PreferenceMap::new());
        }

        let file: PreferenceFile = serde_yaml::from_str(&content)?;
        let mut values = PreferenceMap::new();
        for (key, value) in file.entries {
            let value = match value {
                Value::Null => continue,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::String(s) => s,
                _ => {
                    return Err(PreferenceError::Other(format!(
                        "preference `{}` in {} is not a scalar",
                        key,
                        self.path.display()
                    )))
                }
            };
            values.insert(key, value);
        }
        Ok(values)
    }

    fn save(&self, values: &PreferenceMap) -> PreferenceResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = PreferenceFile {
            entries: values.iter().map(|(k, v)| (k.clone(), to_yaml(v))).collect(),
        };
        let content = serde_yaml::to_string(&file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Apply `f` to the current map and persist the result
    ///
    /// The cache write lock is held from the initial load through the save,
    /// so concurrent writers never overwrite each other's keys. Listeners
    /// must be notified by the caller, after the lock is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut PreferenceMap) -> R) -> PreferenceResult<R> {
        let mut cache = self.cache.write();
        if cache.is_none() {
            *cache = Some(self.load()?);
        }

        let mut values = cache.clone().unwrap_or_default();
        let result = f(&mut values);
        self.save(&values)?;
        *cache = Some(values);
        Ok(result)
    }

    fn update(&self, key: &str, value: Option<&str>) -> PreferenceResult<()> {
        if self.values()?.get(key).map(String::as_str) == value {
            return Ok(());
        }

        let change = self.modify(|values| {
            let previous = match value {
                Some(v) => values.insert(key.to_string(), v.to_string()),
                None => values.remove(key),
            };
            (previous.as_deref() != value)
                .then(|| PreferenceChange::new(key, value.map(str::to_string)))
        })?;

        if let Some(change) = change {
            self.listeners.notify(&change);
        }
        Ok(())
    }
}

/// On-disk shape: a flat mapping of keys to scalars
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PreferenceFile {
    entries: BTreeMap<String, Value>,
}

/// Booleans and integers are written unquoted so the file stays hand-editable,
/// but only when reading them back yields the exact same text
fn to_yaml(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => match value.parse::<i64>() {
            Ok(n) if n.to_string() == value => Value::Number(n.into()),
            _ => Value::String(value.to_string()),
        },
    }
}

fn diff(old: Option<&PreferenceMap>, new: &PreferenceMap) -> Vec<PreferenceChange> {
    let empty = PreferenceMap::new();
    let old = old.unwrap_or(&empty);

    let mut changes: Vec<PreferenceChange> = new
        .iter()
        .filter(|(k, v)| old.get(*k) != Some(*v))
        .map(|(k, v)| PreferenceChange::new(k.clone(), Some(v.clone())))
        .collect();

    changes.extend(
        old.keys()
            .filter(|k| !new.contains_key(*k))
            .map(|k| PreferenceChange::new(k.clone(), None)),
    );
    changes
}

impl std::fmt::Debug for FilePreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePreferences")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl PreferenceSource for FilePreferences {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PreferenceResult<()> {
        self.update(key, Some(value))
    }

    fn remove(&self, key: &str) -> PreferenceResult<()> {
        self.update(key, None)
    }

    fn subscribe(&self, listener: PreferenceListener) -> Subscription {
        self.listeners.add(listener)
    }
}
