//! Contains the ANSI escape codes used to colour console output.

use std::fmt::Display;

/// Represents a text style applied through an ANSI escape code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Style {
    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            code: match self {
                Self::Bold => "\x1B[1m",
                Self::Underline => "\x1B[4m",
            },
            display,
        }
    }
}

/// Represents a foreground colour applied through an ANSI escape code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Yellow,
    Cyan,
}

impl Color {
    /// Applies the colour to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            code: match self {
                Self::Red => "\x1B[31m",
                Self::Yellow => "\x1B[33m",
                Self::Cyan => "\x1B[36m",
            },
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that wraps an object with an escape code and a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    code: &'static str,

    /// The wrapped displayable object.
    pub display: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.code, self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Style};

    #[test]
    fn nested_paint() {
        let painted = Style::Bold.with(Color::Red.with("error")).to_string();
        assert_eq!(painted, "\x1B[1m\x1B[31merror\x1B[0m\x1B[0m");
    }
}
