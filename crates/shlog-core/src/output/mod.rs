//! Output sink abstractions
//!
//! A sink is the shared destination every `Logger` writes to:
//! - `ConsoleSink`: stdout (the default when a context has no sink yet)
//! - `WriterSink`: any `std::io::Write` owned by the host
//! - `MemorySink`: captured lines, for tests and embedding

mod traits;
mod console;
mod writer;
mod memory;

pub use traits::{OutputSink, SharedSink};
pub use console::ConsoleSink;
pub use writer::WriterSink;
pub use memory::MemorySink;
