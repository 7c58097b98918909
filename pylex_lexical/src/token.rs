//! Is a module containing the [`Token`] type and all of its related types.

use derive_new::new;
use getset::{CopyGetters, Getters};
use pylex_base::source_file::Span;
use strum_macros::EnumIter;

/// Is an enumeration containing all kinds of tokens of the language.
///
/// `Indent`, `Dedent`, `Newline` and `Error` are part of the vocabulary but are never produced by
/// the tokenizer: indentation is validated, not tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum TokenKind {
    Integer,
    Float,
    Scientific,
    String,
    Boolean,
    None,
    Identifier,
    ReservedWord,
    BuiltInFunction,
    ArithmeticOp,
    RelationalOp,
    LogicalOp,
    AssignmentOp,
    LeftParenthesis,
    RightParenthesis,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    Dot,
    Semicolon,
    Comment,
    Indent,
    Dedent,
    Newline,
    Error,
}

impl TokenKind {
    /// Gets the human readable description of the token kind used in token listings.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Integer => "Integer Number",
            Self::Float => "Float Number",
            Self::Scientific => "Scientific Number",
            Self::String => "String",
            Self::Boolean => "Boolean Literal",
            Self::None => "None Literal",
            Self::Identifier => "Identifier",
            Self::ReservedWord => "Reserved Word",
            Self::BuiltInFunction => "Built-in Function",
            Self::ArithmeticOp => "Arithmetic Operator",
            Self::RelationalOp => "Relational Operator",
            Self::LogicalOp => "Logical Operator",
            Self::AssignmentOp => "Assignment Operator",
            Self::LeftParenthesis => "Left Parenthesis",
            Self::RightParenthesis => "Right Parenthesis",
            Self::LeftBracket => "Left Bracket",
            Self::RightBracket => "Right Bracket",
            Self::LeftBrace => "Left Brace",
            Self::RightBrace => "Right Brace",
            Self::Comma => "Comma",
            Self::Colon => "Colon",
            Self::Dot => "Dot",
            Self::Semicolon => "Semicolon",
            Self::Comment => "Comment",
            Self::Indent => "Indent",
            Self::Dedent => "Dedent",
            Self::Newline => "Newline",
            Self::Error => "Invalid Token",
        }
    }
}

/// Represents a classified piece of the source code.
///
/// The lexeme of a token is always the exact, unaltered source text covered by its span.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Gets the span that makes up the token.
    #[get = "pub"]
    span: Span,
}

impl Token {
    /// Gets the source text matched by the token.
    #[must_use]
    pub fn lexeme(&self) -> &str { self.span.str() }
}
