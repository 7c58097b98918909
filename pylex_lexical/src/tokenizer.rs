//! Contains the [`Tokenizer`], the engine turning the source code into [`Token`]s one at a time.

use std::{str::FromStr, sync::Arc};

use pylex_base::source_file::{ByteIndex, SourceFile, Span};

use crate::{
    cursor::Cursor,
    error::{
        Error, Indentation, IndentationErrorKind, InvalidNumber, InvalidSymbol, NumberErrorKind,
        UnterminatedString,
    },
    indentation::INDENTATION_UNIT,
    table::{self, BuiltInFunction, ReservedWord},
    token::{Token, TokenKind},
};

/// The opening run of an empty `''` string.
const EMPTY_STRING_FENCE: usize = 2;

/// The opening run of an empty `''''''` string.
const EMPTY_TRIPLE_STRING_FENCE: usize = 6;

/// Is the state machine producing [`Token`]s from a source file.
///
/// Any lexical error is fatal: the tokenizer neither recovers nor rolls back the characters it
/// consumed, so it should be dropped once an error is returned.
///
/// The whole-source indentation check of [`crate::indentation::check`] is not part of the
/// tokenizer; only the indentation following a `:` is validated while scanning.
#[derive(Debug)]
pub struct Tokenizer {
    cursor: Cursor,
}

impl Tokenizer {
    /// Creates a tokenizer starting at the beginning of the given source file.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>) -> Self {
        Self {
            cursor: Cursor::new(source_file),
        }
    }

    /// Checks if the character separates tokens without being part of any.
    fn is_trivia(character: char) -> bool { matches!(character, ' ' | '\t' | '\r' | '\n') }

    /// Lexes the next token of the source code.
    ///
    /// Returns [`None`] once only trivia remains.
    ///
    /// # Errors
    /// - [`Error::InvalidSymbol`]: a character does not start any token.
    /// - [`Error::InvalidNumber`]: a numeric literal is malformed.
    /// - [`Error::UnterminatedString`]: a string literal is never closed.
    /// - [`Error::Indentation`]: a `:` is not followed by a line break and one indentation unit.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        self.cursor.consume_while(Self::is_trivia);

        if !self.cursor.has_more() {
            return Ok(None);
        }

        let start = self.cursor.position();
        let character = self.cursor.peek_current();

        let token = match character {
            '#' => self.handle_comment(start),
            '\'' | '"' => self.handle_string(start, character)?,
            character if character.is_ascii_digit() => self.handle_number(start)?,
            character if character.is_alphabetic() || character == '_' => {
                self.handle_identifier(start)
            }
            character if table::is_operator_starter(character) => {
                self.handle_operator(start, character)
            }
            character if table::is_delimiter(character) => {
                self.handle_delimiter(start, character)?
            }
            character => {
                self.cursor.advance(1);
                let span = Span::new(
                    self.cursor.source_file().clone(),
                    start,
                    start + character.len_utf8(),
                )
                .unwrap();

                return Err(InvalidSymbol { span }.into());
            }
        };

        Ok(Some(token))
    }

    /// Lexes the whole source code, handing every token to the sink in source order.
    ///
    /// The tokens handed out before an error stay valid.
    ///
    /// # Errors
    /// Returns the first error [`Tokenizer::next_token`] encounters.
    pub fn analyze(mut self, mut sink: impl FnMut(Token)) -> Result<(), Error> {
        while let Some(token) = self.next_token()? {
            sink(token);
        }

        Ok(())
    }

    fn create_token(&self, kind: TokenKind, start: ByteIndex) -> Token {
        Token::new(kind, self.cursor.span_from(start))
    }

    fn handle_comment(&mut self, start: ByteIndex) -> Token {
        self.cursor
            .consume_while(|character| character != '\n' && character != '\r');

        self.create_token(TokenKind::Comment, start)
    }

    fn handle_string(&mut self, start: ByteIndex, quote: char) -> Result<Token, Error> {
        // quotes are ascii, the byte length is the character count
        let fence = self.cursor.consume_while(|character| character == quote).len();

        if fence == EMPTY_STRING_FENCE || fence == EMPTY_TRIPLE_STRING_FENCE {
            return Ok(self.create_token(TokenKind::String, start));
        }

        let multiline = fence >= 3;
        let window = if multiline { 4 } else { 2 };
        let closing = quote.to_string().repeat(fence);
        let escaped_closing = format!("\\{closing}");

        self.cursor.consume_while_window(window, |current| {
            current == escaped_closing
                || !current.ends_with(closing.as_str())
                || (current.ends_with('\n') && !multiline)
        });

        // an empty window means the input ran out before the closing fence
        let is_closed = !self.cursor.peek_window(window).is_empty();
        self.cursor.advance(window);

        let span = self.cursor.span_from(start);
        if !is_closed || (!multiline && span.str().contains('\n')) {
            return Err(UnterminatedString { span }.into());
        }

        Ok(Token::new(TokenKind::String, span))
    }

    fn consume_digits(&mut self) -> bool {
        !self
            .cursor
            .consume_while(|character| character.is_ascii_digit())
            .is_empty()
    }

    fn invalid_number(&self, start: ByteIndex, kind: NumberErrorKind) -> Error {
        InvalidNumber {
            span: self.cursor.span_from(start),
            kind,
        }
        .into()
    }

    fn handle_number(&mut self, start: ByteIndex) -> Result<Token, Error> {
        let mut kind = TokenKind::Integer;
        self.consume_digits();

        if self.cursor.has_more() && self.cursor.peek_current() == '.' {
            self.cursor.advance(1);

            if !self.consume_digits() {
                return Err(self.invalid_number(start, NumberErrorKind::IncompleteDecimal));
            }

            kind = TokenKind::Float;
        }

        if self.cursor.has_more() && self.cursor.current_is_any_of(&['e', 'E']) {
            self.cursor.advance(1);

            if self.cursor.has_more() && self.cursor.current_is_any_of(&['+', '-']) {
                self.cursor.advance(1);
            }

            if !self.consume_digits() {
                return Err(self.invalid_number(start, NumberErrorKind::IncompleteExponent));
            }

            // an exponent wins over a fraction
            kind = TokenKind::Scientific;
        }

        if self.cursor.has_more() && self.cursor.peek_current().is_alphabetic() {
            self.cursor.advance(1);
            return Err(self.invalid_number(start, NumberErrorKind::TrailingLetter));
        }

        Ok(self.create_token(kind, start))
    }

    fn handle_identifier(&mut self, start: ByteIndex) -> Token {
        self.cursor
            .consume_while(|character| character.is_alphanumeric() || character == '_');

        let span = self.cursor.span_from(start);
        let word = span.str();

        let kind = if let Ok(reserved_word) = ReservedWord::from_str(word) {
            reserved_word.token_kind()
        } else if BuiltInFunction::from_str(word).is_ok() {
            TokenKind::BuiltInFunction
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, span)
    }

    fn handle_operator(&mut self, start: ByteIndex, first: char) -> Token {
        let second = self.cursor.peek_next().unwrap_or('\0');
        let pair: String = [first, second].into_iter().collect();

        let double_kind = if table::is_relational_operator(&pair) {
            Some(TokenKind::RelationalOp)
        } else if table::is_assignment_operator(&pair) {
            Some(TokenKind::AssignmentOp)
        } else if table::is_double_arithmetic_operator(&pair) {
            Some(TokenKind::ArithmeticOp)
        } else {
            None
        };

        if let Some(kind) = double_kind {
            self.cursor.advance(2);
            return self.create_token(kind, start);
        }

        let kind = if table::is_single_arithmetic_operator(first) {
            TokenKind::ArithmeticOp
        } else {
            match first {
                '<' | '>' => TokenKind::RelationalOp,
                '=' => TokenKind::AssignmentOp,
                '!' => TokenKind::LogicalOp,
                _ => unreachable!("should've been handled by the operator starter check"),
            }
        };

        self.cursor.advance(1);
        self.create_token(kind, start)
    }

    fn handle_delimiter(&mut self, start: ByteIndex, character: char) -> Result<Token, Error> {
        let Some(kind) = table::delimiter_kind(character) else {
            unreachable!("should've been handled by the delimiter check")
        };

        self.cursor.advance(1);
        let token = self.create_token(kind, start);

        if kind == TokenKind::Colon {
            self.expect_block_indentation(&token)?;
        }

        Ok(token)
    }

    /// Checks that the `:` token is followed by a line break and a line indented by exactly one
    /// indentation unit, consuming both.
    ///
    /// Nothing is checked when the `:` ends the input. Once a line break follows it, the next line
    /// must be indented even if it is empty. Only the width of the line right after the
    /// `:` is verified; the indentation of nested blocks is not tracked.
    fn expect_block_indentation(&mut self, colon: &Token) -> Result<(), Error> {
        if !self.cursor.has_more() {
            return Ok(());
        }

        let terminator = self.cursor.peek_current();
        if terminator != '\r' && terminator != '\n' {
            return Err(Indentation {
                span: colon.span().clone(),
                kind: IndentationErrorKind::MissingNewline,
            }
            .into());
        }

        self.cursor.advance(1);
        if terminator == '\r' && self.cursor.has_more() && self.cursor.peek_current() == '\n' {
            self.cursor.advance(1);
        }

        let start = self.cursor.position();
        let width = self
            .cursor
            .consume_while(|character| character == ' ' || character == '\t')
            .len();

        if width != INDENTATION_UNIT {
            return Err(Indentation {
                span: self.cursor.span_from(start),
                kind: IndentationErrorKind::UnexpectedWidth { width },
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
