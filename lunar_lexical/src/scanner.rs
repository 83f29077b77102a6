//! Contains the [`Scanner`], which turns source text into tokens one lexeme at a time.

use std::{str::FromStr, sync::Arc};

use lunar_base::{
    diagnostic::Handler,
    source_file::{self, ByteIndex, SourceFile, Span},
};

use crate::{
    error::{
        self, InvalidEscape, InvalidNumber, InvalidNumberReason, InvalidToken, UnterminatedString,
    },
    token::{
        Comment, EndOfFile, EndOfLine, Error, Name, Number, NumberValue, Reserved, ReservedWord,
        StringLiteral, Symbol, SymbolKind, Token,
    },
    token_stream::TokenStream,
};

/// Scans a [`SourceFile`] into [`Token`]s.
///
/// The scanner keeps two byte offsets into the source: `start`, the first character of the token
/// being scanned, and `current`, the next unread character. Both only ever move forward.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    iter: source_file::Iterator<'a>,
    start: ByteIndex,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the beginning of the given source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iter: source_file.iter(),
            start: 0,
        }
    }

    /// Gets the byte offset of the first character of the last scanned token.
    #[must_use]
    pub fn start(&self) -> ByteIndex { self.start }

    /// Gets the byte offset of the next unread character.
    pub fn current(&mut self) -> ByteIndex { self.iter.position() }

    /// Checks whether every character of the source code has been consumed.
    pub fn is_at_end(&mut self) -> bool { self.iter.peek().is_none() }

    /// Scans the whole source code.
    ///
    /// Comments are dropped and a single [`EndOfFile`] token is appended after the last token.
    ///
    /// # Errors
    /// - [`Error::FatalLexicalError`] - A lexical error was reported to the `handler`; no tokens
    ///   are returned.
    pub fn scan_tokens(mut self, handler: &dyn Handler<error::Error>) -> Result<TokenStream, Error> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            match self.scan_token(handler) {
                Ok(Token::Comment(..)) => (),
                Ok(token) => tokens.push(token),
                Err(Error::EndOfSource) => break,
                Err(error) => return Err(error),
            }
        }

        self.align();
        tokens.push(
            EndOfFile {
                span: self.create_span(),
            }
            .into(),
        );

        Ok(TokenStream::new(tokens))
    }

    /// Scans exactly one token.
    ///
    /// White spaces other than `\n` are skipped first. After the token is made, the scanner is
    /// left at the next character that is not part of the token. A comment is returned as a
    /// [`Token::Comment`] which callers are expected to drop.
    ///
    /// # Errors
    /// - [`Error::EndOfSource`] - Nothing but white spaces is left in the source code.
    /// - [`Error::FatalLexicalError`] - A lexical error was reported to the `handler`.
    pub fn scan_token(&mut self, handler: &dyn Handler<error::Error>) -> Result<Token, Error> {
        self.walk_iter(|character| character != '\n' && character.is_whitespace());
        self.align();

        let (_, character) = self.iter.next().ok_or(Error::EndOfSource)?;

        match character {
            '\n' => Ok(EndOfLine {
                span: self.create_span(),
            }
            .into()),

            '-' => {
                if self.iter.next_if_eq('-') {
                    Ok(self.handle_comment())
                } else {
                    Ok(self.symbol(SymbolKind::Minus))
                }
            }

            '=' => Ok(self.handle_compound(SymbolKind::Assign, SymbolKind::Equal)),
            '>' => Ok(self.handle_compound(SymbolKind::Greater, SymbolKind::GreaterEqual)),
            '<' => Ok(self.handle_compound(SymbolKind::Less, SymbolKind::LessEqual)),

            '~' => {
                if self.iter.next_if_eq('=') {
                    Ok(self.symbol(SymbolKind::NotEqual))
                } else {
                    Err(Self::report(
                        InvalidToken {
                            span: self.create_span(),
                        },
                        handler,
                    ))
                }
            }

            '.' => {
                if self.iter.peek().map_or(false, |(_, c)| c.is_ascii_digit()) {
                    self.handle_number(character, handler)
                } else if self.iter.next_if_eq('.') {
                    if self.iter.next_if_eq('.') {
                        Ok(self.symbol(SymbolKind::Ellipsis))
                    } else {
                        Ok(self.symbol(SymbolKind::Concat))
                    }
                } else {
                    Ok(self.symbol(SymbolKind::Dot))
                }
            }

            '"' | '\'' => self.handle_string(character, handler),

            character if character.is_ascii_digit() => self.handle_number(character, handler),

            character if Self::is_first_name_character(character) => Ok(self.handle_name()),

            character => match SymbolKind::from_char(character) {
                Some(symbol) => Ok(self.symbol(symbol)),
                None => Err(Self::report(
                    InvalidToken {
                        span: self.create_span(),
                    },
                    handler,
                )),
            },
        }
    }

    /// Moves the token start marker up to the cursor.
    fn align(&mut self) { self.start = self.iter.position(); }

    /// Increments the iterator until the predicate returns false.
    fn walk_iter(&mut self, predicate: impl Fn(char) -> bool) {
        while self.iter.next_if(|character| predicate(character)) {}
    }

    /// Creates a span from the token start to the current location of the iterator.
    fn create_span(&mut self) -> Span {
        let end = self.iter.position();
        Span::new(self.iter.source_file().clone(), self.start, end)
            .expect("the cursor always stays on a character boundary")
    }

    /// Hands the error over to the handler and gives back the error that aborts the scan.
    fn report(error: impl Into<error::Error>, handler: &dyn Handler<error::Error>) -> Error {
        handler.receive(error.into());
        Error::FatalLexicalError
    }

    fn symbol(&mut self, symbol: SymbolKind) -> Token {
        Symbol {
            span: self.create_span(),
            symbol,
        }
        .into()
    }

    /// Picks the `=`-suffixed form of the symbol when a `=` follows.
    fn handle_compound(&mut self, single: SymbolKind, compound: SymbolKind) -> Token {
        if self.iter.next_if_eq('=') {
            self.symbol(compound)
        } else {
            self.symbol(single)
        }
    }

    /// Checks if the given character is a valid first character of a name.
    fn is_first_name_character(character: char) -> bool {
        character == '_' || character.is_ascii_alphabetic()
    }

    /// Checks if the given character is a valid character of a name.
    fn is_name_character(character: char) -> bool {
        character == '_' || character.is_ascii_alphanumeric()
    }

    fn handle_comment(&mut self) -> Token {
        // the line terminator is left for the next token
        self.walk_iter(|character| character != '\n');

        Comment {
            span: self.create_span(),
        }
        .into()
    }

    fn handle_name(&mut self) -> Token {
        self.walk_iter(Self::is_name_character);

        let span = self.create_span();

        match ReservedWord::from_str(span.str()) {
            Ok(word) => Reserved { span, word }.into(),
            Err(..) => Name { span }.into(),
        }
    }

    fn handle_string(
        &mut self,
        quote: char,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Token, Error> {
        let mut value = String::new();

        loop {
            let Some((index, character)) = self.iter.next() else {
                return Err(self.report_unterminated_string(handler));
            };

            if character == quote {
                break;
            }

            if character != '\\' {
                value.push(character);
                continue;
            }

            let escaped = match self.iter.next() {
                Some((_, '\\')) => '\\',
                Some((_, 'n')) => '\n',
                Some((_, '\'')) => '\'',
                Some((_, '"')) => '"',
                Some(..) => {
                    let end = self.iter.position();
                    let span = Span::new(self.iter.source_file().clone(), index, end)
                        .expect("the cursor always stays on a character boundary");

                    return Err(Self::report(InvalidEscape { span }, handler));
                }
                None => return Err(self.report_unterminated_string(handler)),
            };

            value.push(escaped);
        }

        Ok(StringLiteral {
            span: self.create_span(),
            value,
        }
        .into())
    }

    fn report_unterminated_string(&mut self, handler: &dyn Handler<error::Error>) -> Error {
        let span = self.create_span();
        Self::report(UnterminatedString { span }, handler)
    }

    /// Scans a numeric literal whose first character, a digit or a `.`, was already consumed.
    fn handle_number(
        &mut self,
        first: char,
        handler: &dyn Handler<error::Error>,
    ) -> Result<Token, Error> {
        let hex = first == '0' && (self.iter.next_if_eq('x') || self.iter.next_if_eq('X'));
        let mut float = first == '.';
        let mut has_digits = !hex;
        let mut exponent = false;
        let mut exponent_signed = false;
        let mut exponent_digits = false;

        while let Some((_, character)) = self.iter.peek() {
            let failure = match character {
                '0'..='9' => {
                    has_digits = true;
                    exponent_digits |= exponent;
                    None
                }
                'e' | 'E' if !hex => {
                    if exponent {
                        Some(InvalidNumberReason::MultipleExponents)
                    } else {
                        exponent = true;
                        float = true;
                        None
                    }
                }
                'a'..='f' | 'A'..='F' => {
                    has_digits = true;
                    (!hex).then_some(InvalidNumberReason::UnexpectedHexDigit)
                }
                '.' => {
                    if hex {
                        Some(InvalidNumberReason::DecimalPointInHex)
                    } else if exponent {
                        Some(InvalidNumberReason::DecimalPointInExponent)
                    } else if float {
                        Some(InvalidNumberReason::MultipleDecimalPoints)
                    } else {
                        float = true;
                        None
                    }
                }
                '+' | '-' if exponent && !exponent_signed && !exponent_digits => {
                    exponent_signed = true;
                    None
                }
                _ => break,
            };

            // the offending character is part of the reported span
            self.iter.next();

            if let Some(reason) = failure {
                return Err(self.report_invalid_number(reason, handler));
            }
        }

        if !has_digits {
            return Err(self.report_invalid_number(InvalidNumberReason::MissingHexDigits, handler));
        }

        if exponent && !exponent_digits {
            return Err(
                self.report_invalid_number(InvalidNumberReason::MissingExponentDigits, handler)
            );
        }

        let span = self.create_span();
        let lexeme = span.str();

        let value = if float {
            lexeme.parse::<f64>().ok().map(NumberValue::Float)
        } else if hex {
            u64::from_str_radix(&lexeme[2..], 16)
                .ok()
                .map(NumberValue::Integer)
        } else {
            // decimal integers too large for 64 bits degrade to floats
            lexeme.parse::<u64>().map_or_else(
                |_| lexeme.parse::<f64>().ok().map(NumberValue::Float),
                |value| Some(NumberValue::Integer(value)),
            )
        };

        match value {
            Some(value) => Ok(Number { span, value }.into()),
            None => Err(Self::report(
                InvalidNumber {
                    span,
                    reason: InvalidNumberReason::Overflow,
                },
                handler,
            )),
        }
    }

    fn report_invalid_number(
        &mut self,
        reason: InvalidNumberReason,
        handler: &dyn Handler<error::Error>,
    ) -> Error {
        let span = self.create_span();
        Self::report(InvalidNumber { span, reason }, handler)
    }
}

#[cfg(test)]
mod tests;
