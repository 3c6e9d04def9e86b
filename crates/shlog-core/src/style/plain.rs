//! Renderer that drops styling

use super::traits::{Style, StyleRenderer};

/// Returns text untouched, whatever the style
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl StyleRenderer for PlainRenderer {
    fn encode(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}
