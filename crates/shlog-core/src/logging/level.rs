//! Log levels

use crate::style::Style;

/// The three levels a `Logger` emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Warn,
    Error,
}

impl Level {
    /// Tag printed at the start of each line
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Style applied to the tag
    pub fn style(&self) -> Style {
        match self {
            Level::Debug => Style::Bold,
            Level::Warn | Level::Error => Style::Red,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_tags() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Warn.to_string(), "WARN");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_level_styles() {
        assert_eq!(Level::Debug.style(), Style::Bold);
        assert_eq!(Level::Warn.style(), Style::Red);
        assert_eq!(Level::Error.style(), Style::Red);
    }
}
