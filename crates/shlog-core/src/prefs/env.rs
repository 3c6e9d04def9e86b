//! Environment variable preference source

use std::env::{self, VarError};

use super::traits::{
    PreferenceError, PreferenceListener, PreferenceResult, PreferenceSource, Subscription,
};

/// Prefix prepended to every key
pub const ENV_PREFIX: &str = "SHLOG_";

/// Serializes tests that read or mutate the process environment
#[cfg(test)]
pub(crate) static ENV_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());

/// Preferences read from `SHLOG_*` environment variables
///
/// This source is read-only, and since the environment is not watched its
/// listeners never fire. Keys are upper-cased, with `-` and `.` mapped to `_`:
/// - `debug` → `SHLOG_DEBUG`
/// - `history.size` → `SHLOG_HISTORY_SIZE`
///
/// # Example
///
/// ```
/// use shlog_core::prefs::{EnvPreferences, PreferenceSource};
///
/// let prefs = EnvPreferences::new();
/// // prefs.get_bool("debug", false) checks SHLOG_DEBUG
/// ```
#[derive(Debug, Default)]
pub struct EnvPreferences {
    _private: (), // Prevent direct construction, use new()
}

impl EnvPreferences {
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// The environment variable consulted for `key`
    pub fn var_name(key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| match c {
                '-' | '.' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        format!("{}{}", ENV_PREFIX, suffix)
    }
}

impl PreferenceSource for EnvPreferences {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> PreferenceResult<Option<String>> {
        let var = Self::var_name(key);
        match env::var(&var) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(PreferenceError::Other(format!(
                "{} is not valid unicode",
                var
            ))),
        }
    }

    fn set(&self, _key: &str, _value: &str) -> PreferenceResult<()> {
        Err(PreferenceError::ReadOnly)
    }

    fn remove(&self, _key: &str) -> PreferenceResult<()> {
        Err(PreferenceError::ReadOnly)
    }

    fn subscribe(&self, _listener: PreferenceListener) -> Subscription {
        Subscription(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_preferences_name() {
        assert_eq!(EnvPreferences::new().name(), "env");
    }

    #[test]
    fn test_var_name() {
        assert_eq!(EnvPreferences::var_name("debug"), "SHLOG_DEBUG");
        assert_eq!(EnvPreferences::var_name("history.size"), "SHLOG_HISTORY_SIZE");
        assert_eq!(EnvPreferences::var_name("show-last"), "SHLOG_SHOW_LAST");
    }

    #[test]
    fn test_env_preferences_read_only() {
        let prefs = EnvPreferences::new();
        assert!(matches!(prefs.set("debug", "true"), Err(PreferenceError::ReadOnly)));
        assert!(matches!(prefs.remove("debug"), Err(PreferenceError::ReadOnly)));
    }

    #[test]
    fn test_env_preferences_get() {
        let _env = ENV_LOCK.lock();
        env::set_var("SHLOG_TEST_ENV_FLAG_12345", "True");

        let prefs = EnvPreferences::new();
        assert_eq!(
            prefs.get("test-env-flag-12345").unwrap(),
            Some("True".to_string())
        );
        assert!(prefs.get_bool("test_env_flag_12345", false).unwrap());

        env::remove_var("SHLOG_TEST_ENV_FLAG_12345");
    }

    #[test]
    fn test_env_preferences_absent() {
        let _env = ENV_LOCK.lock();
        let prefs = EnvPreferences::new();
        assert_eq!(prefs.get("nonexistent_pref_xyz").unwrap(), None);
        assert!(prefs.get_bool("nonexistent_pref_xyz", true).unwrap());
    }
}
