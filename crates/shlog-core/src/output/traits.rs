//! Output sink trait definition

use std::io;
use std::sync::Arc;

/// Destination for formatted log lines
///
/// Implementations:
/// - `ConsoleSink`: writes to stdout
/// - `WriterSink`: wraps any `Write`
/// - `MemorySink`: keeps lines in memory
///
/// Writes are not atomic across lines; concurrent callers may interleave.
pub trait OutputSink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Write a single line; the sink supplies the line terminator
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Push any buffered output to its destination
    fn flush(&self) -> io::Result<()>;
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn OutputSink>;
