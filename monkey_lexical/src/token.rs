//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use monkey_base::source_file::Span;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration representing keywords in the Monkey programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Function,
    Let,
    Return,
    True,
    False,
    If,
    Else,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter().map(|keyword| (keyword.as_str(), keyword)).collect();
        }

        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the source text of the keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "fn",
            Self::Let => "let",
            Self::Return => "return",
            Self::True => "true",
            Self::False => "false",
            Self::If => "if",
            Self::Else => "else",
        }
    }

    /// Gets the name of the keyword used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is an enumeration of every lexical category a [`Token`] can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum TokenKind {
    Eof,
    Illegal,
    Identifier,
    Integer,

    // operators
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,

    // delimiters
    Comma,
    Semicolon,
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,

    Keyword(KeywordKind),
}

impl TokenKind {
    /// Classifies a scanned word: a keyword if the word is reserved, an identifier otherwise.
    #[must_use]
    pub fn lookup_identifier(word: &str) -> Self {
        KeywordKind::from_str(word).map_or(Self::Identifier, Self::Keyword)
    }

    /// Gets the kind of a single-character operator or delimiter.
    #[must_use]
    pub fn from_punctuation(character: char) -> Option<Self> {
        Some(match character {
            '=' => Self::Assign,
            '+' => Self::Plus,
            '-' => Self::Minus,
            '!' => Self::Bang,
            '*' => Self::Asterisk,
            '/' => Self::Slash,
            '<' => Self::LessThan,
            '>' => Self::GreaterThan,
            ',' => Self::Comma,
            ';' => Self::Semicolon,
            '(' => Self::LeftParenthesis,
            ')' => Self::RightParenthesis,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            _ => return None,
        })
    }

    /// Gets the name of the kind used in diagnostics, such as `IDENT` or `==`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Identifier => "IDENT",
            Self::Integer => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Keyword(keyword) => keyword.name(),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Represents a single scanned unit of the source code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, new)]
pub struct Token {
    /// Is the lexical category of the token.
    pub kind: TokenKind,

    /// Is the span that makes up the token. Empty for the end-of-file token.
    pub span: Span,
}

impl Token {
    /// Gets the source text the token was scanned from.
    #[must_use]
    pub fn literal(&self) -> &str { self.span.str() }

    /// Returns `true` if the token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }
}

#[cfg(test)]
mod tests;
