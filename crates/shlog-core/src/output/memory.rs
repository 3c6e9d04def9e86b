//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::OutputSink;

/// A sink that keeps every written line in memory
///
/// This is what tests attach to a context to inspect logger output.
///
/// # Example
///
/// ```
/// use shlog_core::output::{MemorySink, OutputSink};
///
/// let sink = MemorySink::new();
/// sink.write_line("hello").unwrap();
/// assert_eq!(sink.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    flushes: Mutex<usize>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Everything written so far, one line per `\n`
    pub fn contents(&self) -> String {
        let lines = self.lines.lock();
        let mut out = String::new();
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Number of times `flush` has been called
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Discard captured lines and reset the flush counter
    pub fn clear(&self) {
        self.lines.lock().clear();
        *self.flushes.lock() = 0;
    }
}

impl OutputSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        *self.flushes.lock() += 1;
        Ok(())
    }
}
