//! Logger error types

use thiserror::Error;

/// Errors a log call can return
///
/// Logging is allowed to fail: a broken sink surfaces at the call site.
#[derive(Error, Debug)]
pub enum LogError {
    /// Writing or flushing the output sink failed
    #[error("Failed to write log output: {0}")]
    Io(#[from] std::io::Error),
}

pub type LogResult<T> = Result<T, LogError>;
