//! Sink over an arbitrary `Write`

use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::OutputSink;

/// A sink that writes lines into any `Write` implementation
///
/// Useful when the host shell owns its own terminal handle or buffered
/// stream. The writer is guarded by a mutex so the sink can be shared.
///
/// # Example
///
/// ```
/// use shlog_core::output::{OutputSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line("hello").unwrap();
/// assert_eq!(sink.into_inner(), b"hello\n");
/// ```
pub struct WriterSink<W> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self::with_name("writer", writer)
    }

    /// Wrap a writer under a custom sink name
    pub fn with_name(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the wrapped writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl<W> std::fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSink").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    #[test]
    fn test_writer_sink_appends_newline() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();
        assert_eq!(sink.into_inner(), b"first\nsecond\n");
    }

    #[test]
    fn test_writer_sink_flush_reaches_inner() {
        let sink = WriterSink::new(BufWriter::new(Vec::new()));
        sink.write_line("buffered").unwrap();
        sink.flush().unwrap();

        let inner = sink.into_inner().into_inner().unwrap();
        assert_eq!(inner, b"buffered\n");
    }

    #[test]
    fn test_writer_sink_name() {
        assert_eq!(WriterSink::new(Vec::new()).name(), "writer");
        assert_eq!(WriterSink::with_name("tty", Vec::new()).name(), "tty");
    }
}
