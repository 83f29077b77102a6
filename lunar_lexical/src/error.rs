//! Contains all kinds of lexical errors that can occur while scanning the source code.
//!
//! Every error is fatal: the scanner reports it to a [`lunar_base::diagnostic::Handler`] and
//! aborts the whole scan.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lunar_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};

/// A character that can't start any token, or a `~` that isn't followed by `=`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidToken {
    /// The span of the offending character(s).
    pub span: Span,
}

impl Display for InvalidToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let help = (self.span.str() == "~").then_some("did you mean `~=`?");

        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("invalid token `{}`", self.span.str().escape_debug())
            ),
            SourceCodeDisplay::new(&self.span, help)
        )
    }
}

/// Describes why a numeric literal is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum InvalidNumberReason {
    #[error("hexadecimal digit in a decimal literal")]
    UnexpectedHexDigit,

    #[error("more than one decimal point")]
    MultipleDecimalPoints,

    #[error("decimal point in a hexadecimal literal")]
    DecimalPointInHex,

    #[error("decimal point in an exponent")]
    DecimalPointInExponent,

    #[error("more than one exponent")]
    MultipleExponents,

    #[error("exponent has no digits")]
    MissingExponentDigits,

    #[error("hexadecimal literal has no digits")]
    MissingHexDigits,

    #[error("literal doesn't fit in 64 bits")]
    Overflow,
}

/// A malformed numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidNumber {
    /// The span of the literal up to and including the offending character.
    pub span: Span,

    /// What is wrong with the literal.
    pub reason: InvalidNumberReason,
}

impl Display for InvalidNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("invalid number `{}`", self.span.str())
            ),
            SourceCodeDisplay::new(&self.span, Some(self.reason))
        )
    }
}

/// A backslash inside a string literal followed by an unsupported character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidEscape {
    /// The span of the backslash and the character following it.
    pub span: Span,
}

impl Display for InvalidEscape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("invalid escape sequence `{}`", self.span.str().escape_debug())
            ),
            SourceCodeDisplay::new(&self.span, Some(r#"supported escapes are `\\`, `\n`, `\'` and `\"`"#))
        )
    }
}

/// The source code ended before a string literal was closed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedString {
    /// The span from the opening quote to the end of the source code.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("this string is never closed by its matching quote")
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    InvalidToken(InvalidToken),
    InvalidNumber(InvalidNumber),
    InvalidEscape(InvalidEscape),
    UnterminatedString(UnterminatedString),
}

impl Error {
    /// Gets the span of the source code that caused the error.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::InvalidToken(err) => &err.span,
            Self::InvalidNumber(err) => &err.span,
            Self::InvalidEscape(err) => &err.span,
            Self::UnterminatedString(err) => &err.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken(err) => write!(f, "{err}"),
            Self::InvalidNumber(err) => write!(f, "{err}"),
            Self::InvalidEscape(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}
