//! Contains the fixed, read-only tables the tokenizer classifies lexemes with.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::token::TokenKind;

/// Is an enumeration of the words reserved by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum ReservedWord {
    If,
    Else,
    For,
    While,
    Def,
    Class,
    Return,
    Import,
    From,
    Try,
    Except,
    With,
    And,
    Or,
    Not,
    True,
    False,
    None,
    In,
    Is,
}

impl ReservedWord {
    /// Gets the string representation of the reserved word as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::Def => "def",
            Self::Class => "class",
            Self::Return => "return",
            Self::Import => "import",
            Self::From => "from",
            Self::Try => "try",
            Self::Except => "except",
            Self::With => "with",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::True => "True",
            Self::False => "False",
            Self::None => "None",
            Self::In => "in",
            Self::Is => "is",
        }
    }

    /// Gets the kind of token the reserved word is classified as.
    #[must_use]
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::True | Self::False => TokenKind::Boolean,
            Self::None => TokenKind::None,
            Self::And | Self::Or | Self::Not => TokenKind::LogicalOp,
            Self::If
            | Self::Else
            | Self::For
            | Self::While
            | Self::Def
            | Self::Class
            | Self::Return
            | Self::Import
            | Self::From
            | Self::Try
            | Self::Except
            | Self::With
            | Self::In
            | Self::Is => TokenKind::ReservedWord,
        }
    }
}

impl Display for ReservedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`ReservedWord`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of reserved word.")]
pub struct ReservedWordParseError;

impl FromStr for ReservedWord {
    type Err = ReservedWordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_RESERVED_WORD_MAP: HashMap<&'static str, ReservedWord> =
                ReservedWord::iter().map(|word| (word.as_str(), word)).collect();
        }
        STRING_RESERVED_WORD_MAP
            .get(s)
            .copied()
            .ok_or(ReservedWordParseError)
    }
}

/// Is an enumeration of the functions built into the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum BuiltInFunction {
    Print,
    Range,
}

impl BuiltInFunction {
    /// Gets the name of the built-in function as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Range => "range",
        }
    }
}

impl Display for BuiltInFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`BuiltInFunction`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of built-in function.")]
pub struct BuiltInFunctionParseError;

impl FromStr for BuiltInFunction {
    type Err = BuiltInFunctionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|function| function.as_str() == s)
            .ok_or(BuiltInFunctionParseError)
    }
}

/// The two character relational operators.
pub const RELATIONAL_OPERATORS: [&str; 4] = ["==", "!=", "<=", ">="];

/// The two character assignment operators.
pub const ASSIGNMENT_OPERATORS: [&str; 4] = ["+=", "-=", "*=", "/="];

/// The two character arithmetic operators.
pub const DOUBLE_ARITHMETIC_OPERATORS: [&str; 2] = ["//", "**"];

/// The single character arithmetic operators.
pub const SINGLE_ARITHMETIC_OPERATORS: [char; 5] = ['*', '/', '+', '-', '%'];

/// The characters an operator can start with.
pub const OPERATOR_STARTERS: [char; 9] = ['+', '-', '*', '/', '%', '=', '<', '>', '!'];

/// The single character delimiters.
pub const DELIMITERS: [char; 10] = ['(', ')', '[', ']', '{', '}', ',', ':', '.', ';'];

/// Checks if the lexeme is a two character relational operator.
#[must_use]
pub fn is_relational_operator(lexeme: &str) -> bool { RELATIONAL_OPERATORS.contains(&lexeme) }

/// Checks if the lexeme is a two character assignment operator.
#[must_use]
pub fn is_assignment_operator(lexeme: &str) -> bool { ASSIGNMENT_OPERATORS.contains(&lexeme) }

/// Checks if the lexeme is a two character arithmetic operator.
#[must_use]
pub fn is_double_arithmetic_operator(lexeme: &str) -> bool {
    DOUBLE_ARITHMETIC_OPERATORS.contains(&lexeme)
}

/// Checks if the character is a single character arithmetic operator.
#[must_use]
pub fn is_single_arithmetic_operator(character: char) -> bool {
    SINGLE_ARITHMETIC_OPERATORS.contains(&character)
}

/// Checks if the character can start an operator.
#[must_use]
pub fn is_operator_starter(character: char) -> bool { OPERATOR_STARTERS.contains(&character) }

/// Checks if the character is a delimiter.
#[must_use]
pub fn is_delimiter(character: char) -> bool { DELIMITERS.contains(&character) }

/// Gets the kind of token the delimiter character is classified as.
#[must_use]
pub fn delimiter_kind(character: char) -> Option<TokenKind> {
    let kind = match character {
        '(' => TokenKind::LeftParenthesis,
        ')' => TokenKind::RightParenthesis,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        ';' => TokenKind::Semicolon,
        _ => return None,
    };

    Some(kind)
}

/// Checks if the lexeme is itself one of the fixed words or operators of the tables.
///
/// Only token listings use this; it never takes part in classification. Assignment operators are
/// not annotated.
#[must_use]
pub fn is_annotated(lexeme: &str) -> bool {
    if BuiltInFunction::from_str(lexeme).is_ok()
        || ReservedWord::from_str(lexeme).is_ok()
        || is_relational_operator(lexeme)
        || is_double_arithmetic_operator(lexeme)
    {
        return true;
    }

    let mut chars = lexeme.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => is_single_arithmetic_operator(character),
        _ => false,
    }
}
