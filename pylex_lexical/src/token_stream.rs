//! Contains the [`TokenStream`] struct, the output of the lexical analysis.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use pylex_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{error, indentation, token::Token, tokenizer::Tokenizer};

/// Is a list of [`Token`]s in source order.
///
/// This struct is the final output of the lexical analysis phase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// The indentation of the whole source is checked first; when it fails no token is produced.
    /// Otherwise the source is tokenized until the input is exhausted or the first lexical error
    /// occurs.
    ///
    /// # Parameters
    /// - `source_file`: The source file to tokenize.
    /// - `handler`: The handler receiving the lexical error, if any.
    ///
    /// # Returns
    /// The tokens produced before the analysis stopped. The stream is complete only if the handler
    /// received nothing.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        Self::tokenize_with(source_file, handler, |_| ())
    }

    /// Tokenizes the given source file like [`TokenStream::tokenize`], showing every token to the
    /// observer as soon as it is produced.
    ///
    /// The observer sees all the tokens preceding an error before the handler receives the error.
    #[must_use]
    pub fn tokenize_with(
        source_file: &Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
        mut observer: impl FnMut(&Token),
    ) -> Self {
        let mut tokens = Vec::new();

        if let Err(error) = indentation::check(source_file) {
            handler.receive(error.into());
            return Self { tokens };
        }

        let result = Tokenizer::new(source_file.clone()).analyze(|token| {
            observer(&token);
            tokens.push(token);
        });

        if let Err(error) = result {
            handler.receive(error);
        }

        Self { tokens }
    }

    /// Dissolves this struct into its list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
