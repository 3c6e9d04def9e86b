//! Core traits and types for preference sources

use thiserror::Error;

/// Errors that can occur during preference operations
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Preference source is read-only")]
    ReadOnly,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Preference error: {0}")]
    Other(String),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// A change to a single key, delivered to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceChange {
    /// Key that changed
    pub key: String,
    /// New value, `None` when the key was removed
    pub value: Option<String>,
}

impl PreferenceChange {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Interpret the new value as a boolean
    pub fn as_bool(&self, default: bool) -> bool {
        self.value
            .as_deref()
            .map_or(default, |v| parse_bool(v, default))
    }
}

/// Parse `true`/`false` case-insensitively; anything else yields `default`
pub fn parse_bool(value: &str, default: bool) -> bool {
    if value.eq_ignore_ascii_case("true") {
        true
    } else if value.eq_ignore_ascii_case("false") {
        false
    } else {
        default
    }
}

/// Callback invoked on the thread that mutated the source
pub type PreferenceListener = Box<dyn Fn(&PreferenceChange) + Send + Sync>;

/// Handle returned by `PreferenceSource::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(pub(crate) u64);

impl Subscription {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Trait for preference storage implementations
///
/// Implementations can be:
/// - In-memory (`MemoryPreferences`)
/// - Environment variables (`EnvPreferences`)
/// - YAML file-backed (`FilePreferences`)
/// - Custom implementations (registry, platform settings, etc.)
///
/// # Example
///
/// ```
/// use shlog_core::prefs::{MemoryPreferences, PreferenceSource};
///
/// let prefs = MemoryPreferences::new();
/// prefs.set("debug", "true").unwrap();
/// assert!(prefs.get_bool("debug", false).unwrap());
/// ```
pub trait PreferenceSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Retrieve the raw value for a key
    fn get(&self, key: &str) -> PreferenceResult<Option<String>>;

    /// Retrieve a boolean, `default` only when the key is absent or not a boolean
    fn get_bool(&self, key: &str, default: bool) -> PreferenceResult<bool> {
        Ok(self
            .get(key)?
            .as_deref()
            .map_or(default, |v| parse_bool(v, default)))
    }

    /// Store a value
    ///
    /// Returns `Err(PreferenceError::ReadOnly)` if the source doesn't support writing.
    fn set(&self, key: &str, value: &str) -> PreferenceResult<()>;

    /// Remove a value
    ///
    /// Returns `Err(PreferenceError::ReadOnly)` if the source doesn't support writing.
    fn remove(&self, key: &str) -> PreferenceResult<()>;

    /// Register a listener for changes to any key
    fn subscribe(&self, listener: PreferenceListener) -> Subscription;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true", false));
        assert!(parse_bool("TRUE", false));
        assert!(!parse_bool("False", true));
        assert!(parse_bool("yes", true));
        assert!(!parse_bool("yes", false));
        assert!(!parse_bool("", false));
    }

    #[test]
    fn test_change_as_bool() {
        assert!(PreferenceChange::new("debug", Some("true".to_string())).as_bool(false));
        assert!(!PreferenceChange::new("debug", None).as_bool(false));
        assert!(PreferenceChange::new("debug", None).as_bool(true));
    }
}
