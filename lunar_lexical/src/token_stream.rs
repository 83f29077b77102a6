//! Contains the [`TokenStream`] struct, the final output of the lexical analysis phase.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use lunar_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{
    error,
    scanner::Scanner,
    token::{self, Token},
};

/// Is an ordered list of [`Token`]s.
///
/// The stream never contains comments, and its last token is always the one and only
/// [`Token::EndOfFile`].
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(tokens.last(), Some(Token::EndOfFile(..))));
        debug_assert_eq!(
            tokens
                .iter()
                .filter(|token| token.as_end_of_file().is_some())
                .count(),
            1
        );

        Self { tokens }
    }

    /// Tokenizes the given source file.
    ///
    /// This is a shorthand for running a fresh [`Scanner`] over the whole source file.
    ///
    /// # Errors
    /// - [`token::Error::FatalLexicalError`] - A lexical error was reported to the `handler`.
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Self, token::Error> {
        Scanner::new(source_file).scan_tokens(handler)
    }

    /// Gets the tokens that precede the final [`Token::EndOfFile`].
    #[must_use]
    pub fn significant_tokens(&self) -> &[Token] { &self.tokens[..self.tokens.len() - 1] }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}
