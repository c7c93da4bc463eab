//! Fixed 16-color ANSI palette — one foreground color per level.

/// Only the four colors the level tags use; anything richer belongs in a terminal theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Red,
}

impl Color {
    /// Terminates any active SGR styling so the rest of the line uses the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Foreground escape sequence for this color.
    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Cyan => "\x1b[36m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Red => "\x1b[31m",
        }
    }

    /// Wraps `text` in this color and a reset.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{}", self.ansi(), Self::RESET)
    }
}
