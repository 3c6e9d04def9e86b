//! The named logger

use std::borrow::Cow;
use std::error::Error;

use crate::context::LogContext;
use crate::output::OutputSink;

use super::error::LogResult;
use super::level::Level;

/// What a log call prints after the `[name]` prefix
///
/// Passing an error as the message (with no separate cause) prints its
/// `Display` text and emits its trace, so `logger.error(Message::error(&e))`
/// is the short form of `logger.error_with(e.to_string(), &e)`.
#[derive(Debug, Clone)]
pub enum Message<'a> {
    Text(Cow<'a, str>),
    Error(&'a (dyn Error + 'static)),
}

impl<'a> Message<'a> {
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Message::Text(text.into())
    }

    pub fn error(error: &'a (dyn Error + 'static)) -> Self {
        Message::Error(error)
    }

    /// The text printed for this message
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            Message::Text(text) => text,
            Message::Error(error) => Cow::Owned(error.to_string()),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(text: &'a String) -> Self {
        Message::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Message::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Message<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Message::Text(text)
    }
}

impl<'a> From<&'a (dyn Error + 'static)> for Message<'a> {
    fn from(error: &'a (dyn Error + 'static)) -> Self {
        Message::Error(error)
    }
}

/// Named formatter/dispatcher for leveled lines
///
/// Each call reads the context's debug flag, sink and renderer at that
/// moment, formats `<TAG> [<name>] <message>`, writes it, writes the cause
/// trace if there is one, and flushes.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shlog_core::output::MemorySink;
/// use shlog_core::style::PlainRenderer;
/// use shlog_core::{LogContext, Logger};
///
/// let sink = Arc::new(MemorySink::new());
/// let context = LogContext::with_sink(sink.clone()).with_renderer(Arc::new(PlainRenderer));
/// let log = Logger::new("shell", context);
///
/// log.warn("disk low").unwrap();
/// assert_eq!(sink.lines(), vec!["WARN [shell] disk low".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    name: String,
    context: LogContext,
}

impl Logger {
    /// Create a logger
    ///
    /// # Panics
    ///
    /// If `name` is empty.
    pub fn new(name: impl Into<String>, context: LogContext) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "logger name must not be empty");
        Self { name, context }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.context.is_debug()
    }

    pub fn debug<'a>(&self, message: impl Into<Message<'a>>) -> LogResult<()> {
        if self.is_debug_enabled() {
            self.log(Level::Debug, message.into(), None)?;
        }
        Ok(())
    }

    pub fn debug_with<'a>(
        &self,
        message: impl Into<Message<'a>>,
        cause: &(dyn Error + 'static),
    ) -> LogResult<()> {
        if self.is_debug_enabled() {
            self.log(Level::Debug, message.into(), Some(cause))?;
        }
        Ok(())
    }

    pub fn warn<'a>(&self, message: impl Into<Message<'a>>) -> LogResult<()> {
        self.log(Level::Warn, message.into(), None)
    }

    pub fn warn_with<'a>(
        &self,
        message: impl Into<Message<'a>>,
        cause: &(dyn Error + 'static),
    ) -> LogResult<()> {
        self.log(Level::Warn, message.into(), Some(cause))
    }

    pub fn error<'a>(&self, message: impl Into<Message<'a>>) -> LogResult<()> {
        self.log(Level::Error, message.into(), None)
    }

    pub fn error_with<'a>(
        &self,
        message: impl Into<Message<'a>>,
        cause: &(dyn Error + 'static),
    ) -> LogResult<()> {
        self.log(Level::Error, message.into(), Some(cause))
    }

    /// Format and write one entry, ignoring the debug gate
    pub fn log(
        &self,
        level: Level,
        message: Message<'_>,
        cause: Option<&(dyn Error + 'static)>,
    ) -> LogResult<()> {
        // An error passed as the message stands in for a missing cause
        let (text, cause) = match (message, cause) {
            (Message::Error(error), None) => (Cow::Owned(error.to_string()), Some(error)),
            (message, cause) => (message.into_text(), cause),
        };

        let tag = self.context.renderer().encode(level.as_str(), level.style());
        let sink = self.context.sink();

        sink.write_line(&format!("{} [{}] {}", tag, self.name, text))?;
        if let Some(cause) = cause {
            write_trace(sink.as_ref(), cause)?;
        }
        sink.flush()?;
        Ok(())
    }
}

/// The cause's own text, then one line per error in its source chain
fn write_trace(sink: &dyn OutputSink, cause: &(dyn Error + 'static)) -> std::io::Result<()> {
    sink.write_line(&cause.to_string())?;

    let mut source = cause.source();
    while let Some(error) = source {
        sink.write_line(&format!("Caused by: {}", error))?;
        source = error.source();
    }
    Ok(())
}
