//! Contains all kinds of syntactic errors that can occur while parsing the token stream.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use monkey_base::log::{Message, Severity, SourceCodeDisplay};
use monkey_lexical::token::{Token, TokenKind};

use crate::parser::MAXIMUM_NESTING_DEPTH;

/// A token of a particular kind is expected to come next but another token was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnexpectedToken {
    /// The kind of token that was expected.
    pub expected: TokenKind,

    /// The token that was found instead.
    pub found: Token,
}

impl UnexpectedToken {
    /// Gets the plain text of the error message.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "expected next token to be {}, got {} instead",
            self.expected, self.found.kind
        )
    }
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, self.message()))?;
        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(&self.found.span, Option::<i32>::None)
        )
    }
}

/// An expression is expected but the token found cannot start one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoPrefixParseFunction {
    /// The token that cannot start an expression.
    pub found: Token,
}

impl NoPrefixParseFunction {
    /// Gets the plain text of the error message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("no prefix parse function for {} found", self.found.kind)
    }
}

impl Display for NoPrefixParseFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, self.message()))?;
        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(&self.found.span, Option::<i32>::None)
        )
    }
}

/// An integer literal does not fit in a signed 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidIntegerLiteral {
    /// The integer literal token.
    pub token: Token,
}

impl InvalidIntegerLiteral {
    /// Gets the plain text of the error message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("could not parse {:?} as integer", self.token.literal())
    }
}

impl Display for InvalidIntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, self.message()))?;
        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(
                &self.token.span,
                Some(format!("integers range from {} to {}", i64::MIN, i64::MAX))
            )
        )
    }
}

/// Expressions and blocks are nested deeper than [`MAXIMUM_NESTING_DEPTH`] levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestingTooDeep {
    /// The token at which the limit was crossed.
    pub token: Token,
}

impl NestingTooDeep {
    /// Gets the plain text of the error message.
    #[must_use]
    pub fn message(&self) -> String {
        format!("nesting exceeds the maximum depth of {MAXIMUM_NESTING_DEPTH}")
    }
}

impl Display for NestingTooDeep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Message::new(Severity::Error, self.message()))?;
        write!(
            f,
            "\n{}",
            SourceCodeDisplay::new(&self.token.span, Option::<i32>::None)
        )
    }
}

/// Is an enumeration containing all kinds of syntactic errors that can occur while parsing the
/// token stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedToken(UnexpectedToken),
    NoPrefixParseFunction(NoPrefixParseFunction),
    InvalidIntegerLiteral(InvalidIntegerLiteral),
    NestingTooDeep(NestingTooDeep),
}

impl Error {
    /// Gets the plain, single line text of the error message, without colours or source excerpt.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken(error) => error.message(),
            Self::NoPrefixParseFunction(error) => error.message(),
            Self::InvalidIntegerLiteral(error) => error.message(),
            Self::NestingTooDeep(error) => error.message(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken(error) => error.fmt(f),
            Self::NoPrefixParseFunction(error) => error.fmt(f),
            Self::InvalidIntegerLiteral(error) => error.fmt(f),
            Self::NestingTooDeep(error) => error.fmt(f),
        }
    }
}
