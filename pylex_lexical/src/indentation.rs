//! Contains the whole-source indentation check run before a source file is tokenized.

use std::sync::Arc;

use pylex_base::source_file::{SourceFile, Span};

use crate::error::{Indentation, IndentationErrorKind};

/// The width of one level of indentation.
pub const INDENTATION_UNIT: usize = 4;

/// The width a tab counts for in the leading whitespace of a line.
pub const TAB_WIDTH: usize = 4;

/// Gets the width of the leading whitespace of the line, tabs counting as [`TAB_WIDTH`].
#[must_use]
pub fn indentation_width(line: &str) -> usize {
    line.chars()
        .map_while(|character| match character {
            ' ' => Some(1),
            '\t' => Some(TAB_WIDTH),
            _ => None,
        })
        .sum()
}

/// Checks that every line of the source file is indented by a multiple of [`INDENTATION_UNIT`].
///
/// Blank lines and lines holding only a comment are not checked.
///
/// # Errors
/// Returns an [`Indentation`] error pointing at the leading whitespace of the first misaligned
/// line.
pub fn check(source_file: &Arc<SourceFile>) -> Result<(), Indentation> {
    for line_number in 1..=source_file.line_number() {
        let Some(range) = source_file.line_range(line_number) else {
            break;
        };

        let line = &source_file.content()[range.clone()];
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let width = indentation_width(line);
        if width % INDENTATION_UNIT != 0 {
            let leading = line.len()
                - line
                    .trim_start_matches(|character| character == ' ' || character == '\t')
                    .len();

            return Err(Indentation {
                span: Span::new(source_file.clone(), range.start, range.start + leading).unwrap(),
                kind: IndentationErrorKind::Misaligned { width },
            });
        }
    }

    Ok(())
}
