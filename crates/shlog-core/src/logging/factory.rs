//! Logger factory
//!
//! Loggers are named after the type that owns them, the way a shell names
//! its commands' loggers after their implementing classes. There is no
//! cache: every call builds a fresh `Logger`.

use std::any::type_name;

use crate::context::LogContext;

use super::logger::Logger;

/// Creates loggers bound to one `LogContext`
///
/// # Example
///
/// ```
/// use shlog_core::LogContext;
///
/// struct HistoryCommand;
///
/// let factory = LogContext::new().factory().with_short_names();
/// let log = factory.create_with_suffix::<HistoryCommand>("init");
/// assert_eq!(log.name(), "HistoryCommand.init");
/// ```
#[derive(Debug, Clone)]
pub struct LoggerFactory {
    context: LogContext,
    short_names: bool,
}

impl LoggerFactory {
    pub fn new(context: LogContext) -> Self {
        Self {
            context,
            short_names: false,
        }
    }

    /// Drop module paths from type names (`shell::cmd::Foo` → `Foo`)
    ///
    /// Only nominal types are shortened; tuples, slices and references keep
    /// their full name.
    pub fn with_short_names(mut self) -> Self {
        self.short_names = true;
        self
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Logger named after `T`
    pub fn create<T: ?Sized>(&self) -> Logger {
        self.create_named(self.type_name::<T>())
    }

    /// Logger named `<T>.<suffix>`
    pub fn create_with_suffix<T: ?Sized>(&self, suffix: &str) -> Logger {
        self.create_named_with_suffix(&self.type_name::<T>(), suffix)
    }

    /// Logger with an explicit name, for owners that are not Rust types
    pub fn create_named(&self, name: impl Into<String>) -> Logger {
        Logger::new(name, self.context.clone())
    }

    /// Logger named `<name>.<suffix>`
    pub fn create_named_with_suffix(&self, name: &str, suffix: &str) -> Logger {
        self.create_named(format!("{}.{}", name, suffix))
    }

    fn type_name<T: ?Sized>(&self) -> String {
        let full = type_name::<T>();
        if self.short_names {
            short_type_name(full)
        } else {
            full.to_string()
        }
    }
}

/// Strip the module path of a nominal type, keeping generic arguments as written
///
/// Tuples, slices, arrays and references are returned unchanged.
fn short_type_name(full: &str) -> String {
    if !full.starts_with(|c: char| c.is_alphabetic() || c == '_') {
        return full.to_string();
    }

    let (path, generics) = full.split_at(full.find('<').unwrap_or(full.len()));
    let base = path.rsplit("::").next().unwrap_or(path);
    format!("{}{}", base, generics)
}

/// Logger named after `T`, bound to the process-wide context
pub fn create<T: ?Sized>() -> Logger {
    LogContext::global().factory().create::<T>()
}

/// Logger named `<T>.<suffix>`, bound to the process-wide context
pub fn create_with_suffix<T: ?Sized>(suffix: &str) -> Logger {
    LogContext::global().factory().create_with_suffix::<T>(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;
    use crate::style::PlainRenderer;
    use std::sync::Arc;

    struct FooService;

    #[allow(dead_code)]
    struct Wrapper<T>(T);

    #[test]
    fn test_create_uses_type_name() {
        let factory = LoggerFactory::new(LogContext::new());
        let log = factory.create::<FooService>();

        assert_eq!(log.name(), type_name::<FooService>());
        assert!(log.name().ends_with("::FooService"));
    }

    #[test]
    fn test_create_with_suffix() {
        let factory = LoggerFactory::new(LogContext::new());
        let log = factory.create_with_suffix::<FooService>("init");
        assert!(log.name().ends_with("FooService.init"));

        let short = factory.clone().with_short_names();
        assert_eq!(short.create_with_suffix::<FooService>("init").name(), "FooService.init");
    }

    #[test]
    fn test_same_owner_same_name_distinct_instances() {
        let (context, sink) = {
            let sink = Arc::new(MemorySink::new());
            let context =
                LogContext::with_sink(sink.clone()).with_renderer(Arc::new(PlainRenderer::new()));
            (context, sink)
        };
        let factory = context.factory().with_short_names();

        let a = factory.create::<FooService>();
        let b = factory.create::<FooService>();
        assert_eq!(a.name(), b.name());

        a.warn("from a").unwrap();
        drop(a);
        b.warn("from b").unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "WARN [FooService] from a".to_string(),
                "WARN [FooService] from b".to_string(),
            ]
        );
    }

    #[test]
    fn test_warn_scenario() {
        let sink = Arc::new(MemorySink::new());
        let context = LogContext::with_sink(sink.clone()).with_renderer(Arc::new(PlainRenderer::new()));
        let log = context.factory().create::<FooService>();

        log.warn("disk low").unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1); // no trace without a cause
        assert!(lines[0].starts_with("WARN ["));
        assert!(lines[0].contains("FooService]"));
        assert!(lines[0].ends_with("] disk low"));
    }

    #[test]
    fn test_create_named() {
        let factory = LoggerFactory::new(LogContext::new());
        assert_eq!(factory.create_named("groovysh").name(), "groovysh");
        assert_eq!(
            factory.create_named_with_suffix("groovysh", "parser").name(),
            "groovysh.parser"
        );
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("a::b::FooService"), "FooService");
        assert_eq!(short_type_name("FooService"), "FooService");
        assert_eq!(
            short_type_name("a::Wrapper<b::FooService>"),
            "Wrapper<b::FooService>"
        );

        assert_eq!(short_type_name("(a::X, b::Y)"), "(a::X, b::Y)");
        assert_eq!(short_type_name("[a::Foo]"), "[a::Foo]");
        assert_eq!(short_type_name("&a::Foo"), "&a::Foo");

        let factory = LoggerFactory::new(LogContext::new()).with_short_names();
        assert_eq!(
            factory.create::<(FooService, u8)>().name(),
            type_name::<(FooService, u8)>()
        );
        assert!(factory.create::<Wrapper<FooService>>().name().starts_with("Wrapper<"));
    }

    #[test]
    fn test_factory_shares_context() {
        let context = LogContext::new();
        let log = context.factory().create::<FooService>();

        context.set_debug(true);
        assert!(log.is_debug_enabled());
    }

    #[test]
    fn test_global_factory_functions() {
        let log = create::<FooService>();
        assert!(log.name().ends_with("FooService"));
        assert!(create_with_suffix::<FooService>("init").name().ends_with("FooService.init"));
    }
}
