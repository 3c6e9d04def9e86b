//! ANSI renderer backed by `colored`

use colored::Colorize;

use super::traits::{Style, StyleRenderer};

/// Renders styles as ANSI escape sequences
///
/// Whether escapes are actually emitted follows `colored`'s terminal
/// detection (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`); hosts can pin it
/// with `colored::control::set_override`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl AnsiRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl StyleRenderer for AnsiRenderer {
    fn encode(&self, text: &str, style: Style) -> String {
        match style {
            Style::Bold => text.bold().to_string(),
            Style::Red => text.red().to_string(),
        }
    }
}
