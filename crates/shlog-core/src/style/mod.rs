//! Level tag styling
//!
//! - `AnsiRenderer`: terminal colors via `colored`
//! - `PlainRenderer`: no escapes, for pipes and tests

mod traits;
mod ansi;
mod plain;

pub use traits::{SharedRenderer, Style, StyleRenderer};
pub use ansi::AnsiRenderer;
pub use plain::PlainRenderer;
