//! Preference source abstractions
//!
//! The logger only cares about one preference, `debug`, but sources are
//! generic key-value stores with change notification:
//! - `MemoryPreferences`: in-memory, read-write
//! - `EnvPreferences`: `SHLOG_*` environment variables, read-only
//! - `FilePreferences`: YAML file (~/.config/shlog/prefs.yaml)
//!
//! `watch_debug` wires any of them into a `LogContext`.

mod traits;
mod listeners;
mod memory;
mod env;
mod file;
mod watch;

pub use traits::{
    parse_bool, PreferenceChange, PreferenceError, PreferenceListener, PreferenceResult,
    PreferenceSource, Subscription,
};
pub use listeners::Listeners;
pub use memory::MemoryPreferences;
pub use env::EnvPreferences;
pub use file::FilePreferences;
pub use watch::{watch_debug, DEBUG_KEY};
