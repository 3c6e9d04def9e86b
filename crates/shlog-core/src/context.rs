//! Shared logging state
//!
//! A `LogContext` is the handle every `Logger` reads at call time: the debug
//! flag, the output sink and the style renderer. Cloning it shares the state.
//! Hosts that want one context per process use `LogContext::global()`; tests
//! build their own so they never see each other's flag or sink.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::logging::LoggerFactory;
use crate::output::{ConsoleSink, SharedSink};
use crate::prefs::{watch_debug, PreferenceResult, PreferenceSource};
use crate::style::{AnsiRenderer, SharedRenderer};

/// Process-wide context
static GLOBAL: Lazy<LogContext> = Lazy::new(LogContext::new);

/// Shared, thread-safe logging configuration
#[derive(Clone)]
pub struct LogContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    debug: AtomicBool,
    sink: RwLock<Option<SharedSink>>,
    renderer: RwLock<SharedRenderer>,
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LogContext {
    /// Create a context with debug off, no sink yet, and ANSI styling
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ContextInner {
                debug: AtomicBool::new(false),
                sink: RwLock::new(None),
                renderer: RwLock::new(Arc::new(AnsiRenderer::new())),
            }),
        }
    }

    /// Create a context writing to `sink`
    pub fn with_sink(sink: SharedSink) -> Self {
        let context = Self::new();
        context.set_sink(sink);
        context
    }

    /// Replace the renderer, builder style
    pub fn with_renderer(self, renderer: SharedRenderer) -> Self {
        self.set_renderer(renderer);
        self
    }

    /// Create a context whose debug flag follows `source`
    pub fn from_preferences(source: &dyn PreferenceSource) -> PreferenceResult<Self> {
        let context = Self::new();
        watch_debug(source, &context)?;
        Ok(context)
    }

    /// The process-wide context
    pub fn global() -> &'static LogContext {
        &GLOBAL
    }

    pub fn is_debug(&self) -> bool {
        self.inner.debug.load(Ordering::Relaxed)
    }

    pub fn set_debug(&self, enabled: bool) {
        self.inner.debug.store(enabled, Ordering::Relaxed);
    }

    /// Current sink; a `ConsoleSink` is installed the first time none is set
    pub fn sink(&self) -> SharedSink {
        if let Some(sink) = self.inner.sink.read().as_ref() {
            return Arc::clone(sink);
        }

        let mut slot = self.inner.sink.write();
        let sink = slot.get_or_insert_with(|| {
            tracing::debug!("no output sink set, installing console sink");
            let console: SharedSink = Arc::new(ConsoleSink::new());
            console
        });
        Arc::clone(sink)
    }

    /// Check if a sink has been set or defaulted
    pub fn has_sink(&self) -> bool {
        self.inner.sink.read().is_some()
    }

    /// Replace the sink; loggers pick it up on their next call
    pub fn set_sink(&self, sink: SharedSink) {
        *self.inner.sink.write() = Some(sink);
    }

    pub fn renderer(&self) -> SharedRenderer {
        self.inner.renderer.read().clone()
    }

    pub fn set_renderer(&self, renderer: SharedRenderer) {
        *self.inner.renderer.write() = renderer;
    }

    /// Factory creating loggers bound to this context
    pub fn factory(&self) -> LoggerFactory {
        LoggerFactory::new(self.clone())
    }
}

impl std::fmt::Debug for LogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sink = self.inner.sink.read();
        f.debug_struct("LogContext")
            .field("debug", &self.is_debug())
            .field("sink", &sink.as_ref().map(|s| s.name().to_string()))
            .finish()
    }
}
