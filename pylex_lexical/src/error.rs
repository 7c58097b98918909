//! Contains all kinds of lexical errors that can occur while tokenizing the source code.
//!
//! Every error is fatal: the analysis stops at the first one.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use pylex_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// Is an enumeration of the ways the indentation of a source file can be wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndentationErrorKind {
    /// The leading whitespace of a line is not a multiple of the indentation unit wide.
    Misaligned {
        /// The width of the leading whitespace, tabs counting as four.
        width: usize,
    },

    /// The line following a `:` is not indented by exactly one indentation unit.
    UnexpectedWidth {
        /// The number of whitespace characters found.
        width: usize,
    },

    /// A `:` is not immediately followed by a line break.
    MissingNewline,
}

/// The indentation of the source code does not follow the block structure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Indentation {
    /// The span of the offending whitespace, or of the `:` when no line break follows it.
    pub span: Span,

    /// The kind of indentation error.
    pub kind: IndentationErrorKind,
}

impl Indentation {
    /// Gets the line number (starting at 1) the error was found on.
    #[must_use]
    pub fn line(&self) -> usize { self.span.start_location().line }
}

impl Display for Indentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (message, help) = match self.kind {
            IndentationErrorKind::Misaligned { width } => (
                format!("incorrect indentation on line {}", self.line()),
                format!("the indentation is {width} columns wide, not a multiple of 4"),
            ),
            IndentationErrorKind::UnexpectedWidth { width } => (
                format!("incorrect indentation after `:` on line {}", self.line()),
                format!("expected 4 whitespace characters, found {width}"),
            ),
            IndentationErrorKind::MissingNewline => (
                format!("expected a line break after `:` on line {}", self.line()),
                "the block must start on the next line".to_string(),
            ),
        };

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(&self.span, Some(help))
        )
    }
}

/// The source code contains a character that does not start any token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidSymbol {
    /// The span of the invalid character.
    pub span: Span,
}

impl Display for InvalidSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("found an invalid symbol `{}`", self.span.str())
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration of the ways a numeric literal can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberErrorKind {
    /// The literal is immediately followed by a letter, e.g. `12a`.
    TrailingLetter,

    /// The decimal point is not followed by any digit, e.g. `12.`.
    IncompleteDecimal,

    /// The exponent marker (and its sign) is not followed by any digit, e.g. `1e+`.
    IncompleteExponent,
}

/// The source code contains a malformed numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidNumber {
    /// The span of the literal scanned so far, including the offending character if any.
    pub span: Span,

    /// The kind of malformation.
    pub kind: NumberErrorKind,
}

impl Display for InvalidNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (message, help) = match self.kind {
            NumberErrorKind::TrailingLetter => {
                ("invalid number", "a number cannot be followed by a letter")
            }
            NumberErrorKind::IncompleteDecimal => (
                "invalid decimal number",
                "the decimal point must be followed by digits",
            ),
            NumberErrorKind::IncompleteExponent => (
                "invalid scientific number",
                "the exponent must contain digits",
            ),
        };

        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("{message} `{}`", self.span.str())
            ),
            SourceCodeDisplay::new(&self.span, Some(help))
        )
    }
}

/// The source code contains a string literal that is never closed on its line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The span of the string scanned so far.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string"),
            SourceCodeDisplay::new(
                &self.span,
                Some("only triple-quoted strings can span several lines")
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    Indentation(Indentation),
    InvalidSymbol(InvalidSymbol),
    InvalidNumber(InvalidNumber),
    UnterminatedString(UnterminatedString),
}

impl Error {
    /// Gets the span the error points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Indentation(error) => &error.span,
            Self::InvalidSymbol(error) => &error.span,
            Self::InvalidNumber(error) => &error.span,
            Self::UnterminatedString(error) => &error.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Indentation(error) => write!(f, "{error}"),
            Self::InvalidSymbol(error) => write!(f, "{error}"),
            Self::InvalidNumber(error) => write!(f, "{error}"),
            Self::UnterminatedString(error) => write!(f, "{error}"),
        }
    }
}
