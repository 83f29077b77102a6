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
    Info,
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
            Severity::Info => Color::Green.with("[info]:"),
            Severity::Warning => Color::Yellow.with("[warning]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the first line of a span with a marker under
/// the offending characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start_location = self.span.start_location();
        let end_location = self.span.end_location();
        let line_number = start_location.line;
        let gutter_width = get_digit(line_number);

        writeln!(
            f,
            "{:gutter_width$}{} {}:{start_location}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            self.span.source_file().full_path().display(),
        )?;

        writeln!(f, "{:gutter_width$} {}", "", Style::Bold.with(Color::Cyan.with("┃")))?;

        let line = self
            .span
            .source_file()
            .get_line(line_number)
            .unwrap_or_default();

        write!(
            f,
            "{} {} ",
            Style::Bold.with(Color::Cyan.with(line_number)),
            Style::Bold.with(Color::Cyan.with("┃"))
        )?;

        // tabs are expanded to four spaces both here and in the marker line
        let mut marker = String::new();
        for (index, char) in line.chars().filter(|c| *c != '\n' && *c != '\r').enumerate() {
            let column = index + 1;
            let in_span = column >= start_location.column
                && (end_location.line > line_number || column < end_location.column);
            let width = if char == '\t' { 4 } else { 1 };

            if char == '\t' {
                write!(f, "    ")?;
            } else {
                write!(f, "{char}")?;
            }

            let fill = if in_span {
                '^'
            } else if column < start_location.column {
                ' '
            } else {
                continue;
            };
            marker.extend(std::iter::repeat(fill).take(width));
        }
        writeln!(f)?;

        // an empty span, for example the end of the file, still gets a single marker
        if !marker.contains('^') {
            marker.push('^');
        }

        write!(
            f,
            "{:gutter_width$} {} {}",
            "",
            Style::Bold.with(Color::Cyan.with("┃")),
            Style::Bold.with(Color::Red.with(marker))
        )?;

        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", Style::Bold.with("help"))?;
        }

        writeln!(f)
    }
}
