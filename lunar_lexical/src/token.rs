//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use lunar_base::source_file::{SourceElement, Span};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing the reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum ReservedWord {
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
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

impl ReservedWord {
    /// Gets the string representation of the reserved word as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Break => "break",
            Self::Do => "do",
            Self::Else => "else",
            Self::ElseIf => "elseif",
            Self::End => "end",
            Self::False => "false",
            Self::For => "for",
            Self::Function => "function",
            Self::If => "if",
            Self::In => "in",
            Self::Local => "local",
            Self::Nil => "nil",
            Self::Not => "not",
            Self::Or => "or",
            Self::Repeat => "repeat",
            Self::Return => "return",
            Self::Then => "then",
            Self::True => "true",
            Self::Until => "until",
            Self::While => "while",
        }
    }
}

/// Is an enumeration of every operator and punctuation symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum SymbolKind {
    Add,
    Minus,
    Multiply,
    Divide,
    Mod,
    Power,
    Length,
    Equal,
    GreaterEqual,
    LessEqual,
    Less,
    Greater,
    NotEqual,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Concat,
    Ellipsis,
    Assign,
}

impl SymbolKind {
    /// Gets the string representation of the symbol as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Mod => "%",
            Self::Power => "^",
            Self::Length => "#",
            Self::Equal => "==",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::NotEqual => "~=",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Concat => "..",
            Self::Ellipsis => "...",
            Self::Assign => "=",
        }
    }

    /// Gets the symbol made of exactly the given character, if any.
    ///
    /// Characters that may start a longer symbol (`=`, `<`, `>`, `.`, `-`) are included and map
    /// to their one character form.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        Some(match character {
            '+' => Self::Add,
            '-' => Self::Minus,
            '*' => Self::Multiply,
            '/' => Self::Divide,
            '%' => Self::Mod,
            '^' => Self::Power,
            '#' => Self::Length,
            '<' => Self::Less,
            '>' => Self::Greater,
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            '[' => Self::LeftBracket,
            ']' => Self::RightBracket,
            ';' => Self::Semicolon,
            ':' => Self::Colon,
            ',' => Self::Comma,
            '.' => Self::Dot,
            '=' => Self::Assign,
            _ => return None,
        })
    }
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is the value of a numeric literal.
///
/// Literals with a fractional part or an exponent are floats; every other literal, hexadecimal
/// ones included, is an integer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, EnumAsInner)]
#[allow(missing_docs)]
pub enum NumberValue {
    Integer(u64),
    Float(f64),
}

impl Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

/// Is an enumeration containing all kinds of tokens produced by the scanner.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Reserved(Reserved),
    Number(Number),
    String(StringLiteral),
    Symbol(Symbol),
    Name(Name),
    EndOfLine(EndOfLine),
    EndOfFile(EndOfFile),
    Comment(Comment),
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Reserved(token) => &token.span,
            Self::Number(token) => &token.span,
            Self::String(token) => &token.span,
            Self::Symbol(token) => &token.span,
            Self::Name(token) => &token.span,
            Self::EndOfLine(token) => &token.span,
            Self::EndOfFile(token) => &token.span,
            Self::Comment(token) => &token.span,
        }
    }

    /// Gets the bracketed category tag used when dumping tokens, e.g. `[RESERVED]`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Reserved(..) => "[RESERVED]",
            Self::Number(..) => "[NUMBER]",
            Self::String(..) => "[STRING]",
            Self::Symbol(..) => "[SYMBOL]",
            Self::Name(..) => "[NAME]",
            Self::EndOfLine(..) => "[EOL]",
            Self::EndOfFile(..) => "[EOF]",
            Self::Comment(..) => "[COMMENT]",
        }
    }
}

impl SourceElement for Token {
    fn span(&self) -> Span { self.span().clone() }
}

/// Represents a contiguous sequence of characters that are reserved for a [`ReservedWord`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reserved {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`ReservedWord`] that the token represents.
    pub word: ReservedWord,
}

/// Represents a numeric literal in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the converted value of the literal.
    pub value: NumberValue,
}

/// Represents a quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// Is the span that makes up the token, quotes included.
    pub span: Span,

    /// Is the content of the literal with every escape sequence resolved.
    pub value: String,
}

/// Represents an operator or a punctuation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the kind of symbol that the token represents.
    pub symbol: SymbolKind,
}

/// Represents an identifier that isn't a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name {
    /// Is the span that makes up the token.
    pub span: Span,
}

impl Name {
    /// Gets the identifier as written in the source code.
    #[must_use]
    pub fn identifier(&self) -> &str { self.span.str() }
}

/// Represents a `\n` line terminator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndOfLine {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Represents the end of the source code. Its span is empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndOfFile {
    /// Is the span that makes up the token.
    pub span: Span,
}

/// Represents a `--` line comment. It is never part of a token stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Comment {
    /// Is the span that makes up the token, the `--` included.
    pub span: Span,
}

/// Is an error that can occur when invoking the [`crate::scanner::Scanner::scan_token`] method.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, thiserror::Error,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error("encountered a fatal lexical error that causes the process to stop.")]
    FatalLexicalError,

    #[error("only insignificant white spaces are left in the source code.")]
    EndOfSource,
}
