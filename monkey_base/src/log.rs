//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Warning,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        write!(f, "{log_header} {}", Style::Bold.with(&self.display))
    }
}

/// Structure implementing [`Display`] that prints the source line a span starts on, with the span
/// itself underlined.
///
/// Monkey tokens never cross a line break, so only the first line of the span is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.span.start_location();
        let line_number = location.line.to_string();
        let gutter = " ".repeat(line_number.len() + 1);
        let pipe = Style::Bold.with(Color::Cyan.with("┃"));

        writeln!(
            f,
            "{}{} {}:{}:{}",
            &gutter[1..],
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().name().display(),
            location.line,
            location.column
        )?;
        writeln!(f, "{gutter}{pipe}")?;

        let source_file = self.span.source_file();
        let line = source_file.get_line(location.line).unwrap_or_default();
        let line_start = source_file
            .line_start(location.line)
            .unwrap_or_else(|| self.span.start());

        write!(
            f,
            "{} {pipe} ",
            Style::Bold.with(Color::Cyan.with(&line_number))
        )?;

        let mut marker = String::new();
        for (offset, character) in line.char_indices() {
            if character == '\n' || character == '\r' {
                break;
            }

            let byte = line_start + offset;
            let text = if character == '\t' {
                "    ".to_string()
            } else {
                character.to_string()
            };

            if byte >= self.span.start() && byte < self.span.end() {
                write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(&text)))
                )?;
                marker.push_str(&"^".repeat(text.chars().count()));
            } else {
                write!(f, "{text}")?;

                if byte < self.span.start() {
                    marker.push_str(&" ".repeat(text.chars().count()));
                }
            }
        }
        writeln!(f)?;

        // empty spans (end of file) still get a caret
        if !marker.contains('^') {
            marker.push('^');
        }

        write!(f, "{gutter}{pipe} {}", Color::Red.with(marker.trim_end()))?;

        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }

        writeln!(f)
    }
}
