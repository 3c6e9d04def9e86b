//! Style renderer trait definition

use std::sync::Arc;

/// Named style token applied to a level tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Emphasis, used for DEBUG
    Bold,
    /// Alert color, used for WARN and ERROR
    Red,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Red => "red",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a style token and a text fragment to a renderable string
///
/// Pure formatting: no I/O, no state.
pub trait StyleRenderer: Send + Sync {
    fn encode(&self, text: &str, style: Style) -> String;
}

/// Type alias for an Arc-wrapped renderer
pub type SharedRenderer = Arc<dyn StyleRenderer>;
