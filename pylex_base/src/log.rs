//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Decoration, Style};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
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
        let log_header = match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
            Severity::Info => Color::Green.with("[info]:"),
        };

        write!(
            f,
            "{} {}",
            Style::Bold.with(log_header),
            Style::Bold.with(&self.display)
        )
    }
}

fn digit_count(number: usize) -> usize { number.to_string().len() }

/// Gets the number of columns the text occupies once tabs are expanded to four spaces.
fn display_width(text: &str) -> usize {
    text.chars()
        .filter(|character| !matches!(character, '\r' | '\n'))
        .map(|character| if character == '\t' { 4 } else { 1 })
        .sum()
}

/// Structure implementing [`Display`] that prints the particular span of the source code.
///
/// Single line spans are underlined with carets and followed by the help message on the same
/// line; spans covering several lines print the help message below the excerpt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start_location = self.span.start_location();
        let end_line = self
            .span
            .end_location()
            .map_or_else(|| source_file.line_number(), |location| location.line);
        let gutter = digit_count(end_line);
        let pipe = Style::Bold.with(Color::Cyan.with("|"));

        writeln!(
            f,
            "{:gutter$} {} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.full_path().display(),
            start_location.line,
            start_location.column
        )?;
        writeln!(f, "{:gutter$} {pipe}", "")?;

        for line_number in start_location.line..=end_line {
            let line = source_file.get_line(line_number).unwrap_or_default();

            write!(
                f,
                "{} {pipe} ",
                Style::Bold.with(Color::Cyan.with(format!("{line_number:>gutter$}")))
            )?;

            for character in line.chars() {
                match character {
                    '\t' => f.write_str("    ")?,
                    '\r' | '\n' => {}
                    character => write!(f, "{character}")?,
                }
            }

            writeln!(f)?;
        }

        if start_location.line == end_line {
            let line = source_file
                .get_line(start_location.line)
                .unwrap_or_default();
            let prefix: String = line.chars().take(start_location.column - 1).collect();
            let marker = "^".repeat(display_width(self.span.str()).max(1));

            write!(
                f,
                "{:gutter$} {pipe} {:prefix_width$}{}",
                "",
                "",
                Style::Bold.with(Color::Red.with(marker)),
                prefix_width = display_width(&prefix)
            )?;

            if let Some(help) = &self.help_display {
                write!(f, " {}: {help}", Style::Bold.with("help"))?;
            }

            writeln!(f)?;
        } else if let Some(help) = &self.help_display {
            writeln!(
                f,
                "{:gutter$} {} {}: {help}",
                "",
                Style::Bold.with(Color::Cyan.with("=")),
                Style::Bold.with("help")
            )?;
        }

        Ok(())
    }
}
