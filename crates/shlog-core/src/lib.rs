//! shlog Core
//!
//! A small named logger for interactive shells.
//! Every `Logger` prints `<TAG> [<name>] <message>` lines (DEBUG, WARN or
//! ERROR, with a colored tag) to a shared output sink, followed by the cause
//! chain when an error is attached. DEBUG lines are gated by a flag that
//! follows the `debug` preference of whatever store the host wires in.
//!
//! ```rust
//! use std::sync::Arc;
//! use shlog_core::prefs::{MemoryPreferences, PreferenceSource};
//! use shlog_core::output::MemorySink;
//! use shlog_core::LogContext;
//!
//! struct ParserCommand;
//!
//! let prefs = MemoryPreferences::new();
//! let context = LogContext::from_preferences(&prefs).unwrap();
//! let sink = Arc::new(MemorySink::new());
//! context.set_sink(sink.clone());
//!
//! let log = context.factory().create::<ParserCommand>();
//! log.debug("not shown").unwrap();
//!
//! prefs.set("debug", "true").unwrap();
//! log.debug("shown").unwrap();
//! assert_eq!(sink.lines().len(), 1);
//! ```

pub mod output;
pub mod style;
pub mod prefs;
pub mod context;
pub mod logging;

// Re-export commonly used types
pub use context::LogContext;

pub use logging::{
    create, create_with_suffix,
    Level, LogError, LogResult, Logger, LoggerFactory, Message,
};

pub use output::{ConsoleSink, MemorySink, OutputSink, SharedSink, WriterSink};

pub use prefs::{
    watch_debug, EnvPreferences, FilePreferences, MemoryPreferences,
    PreferenceChange, PreferenceError, PreferenceResult, PreferenceSource,
};

pub use style::{AnsiRenderer, PlainRenderer, Style, StyleRenderer};
