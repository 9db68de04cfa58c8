//! Contains the [`Parser`] logic.

use std::collections::HashMap;

use getset::Getters;
use monkey_base::diagnostic::Handler;
use monkey_lexical::{
    lexer::Lexer,
    token::{Token, TokenKind},
};

use crate::{
    error::{Error, NestingTooDeep, UnexpectedToken},
    syntax_tree::expression::Expression,
};

/// The deepest expressions and blocks may nest before [`Error::NestingTooDeep`] is reported.
///
/// Every parse level and every folded infix operator counts as one level, so the syntax tree never
/// gets deeper than this.
pub const MAXIMUM_NESTING_DEPTH: usize = 256;

/// Parses the expression that starts at the current token.
pub type PrefixParseFn<'a> = fn(&mut Parser<'a>, &dyn Handler<Error>) -> Option<Expression>;

/// Parses the rest of an expression whose operator is the current token, given its left operand.
pub type InfixParseFn<'a> =
    fn(&mut Parser<'a>, Expression, &dyn Handler<Error>) -> Option<Expression>;

/// Binding power of an operator; variants are ordered from the loosest to the tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

impl Precedence {
    /// Gets the precedence a token has when it appears in infix position.
    ///
    /// Tokens that are not infix operators bind with [`Precedence::Lowest`].
    #[must_use]
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Self::Equals,
            TokenKind::LessThan | TokenKind::GreaterThan => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LeftParenthesis => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Represents a Pratt parser reading from a [`Lexer`] through a two-token window.
///
/// Expressions are parsed by looking up the handler registered for the current token kind, so the
/// grammar can be extended with [`Parser::register_prefix()`] and [`Parser::register_infix()`].
#[derive(Getters)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,

    /// Gets the token under examination.
    #[get = "pub"]
    current_token: Token,

    /// Gets the token after [`Self::current_token()`].
    #[get = "pub"]
    peek_token: Token,

    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn<'a>>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn<'a>>,

    nesting_depth: usize,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("lexer", &self.lexer)
            .field("current_token", &self.current_token)
            .field("peek_token", &self.peek_token)
            .field("prefix_kinds", &self.prefix_parse_fns.keys())
            .field("infix_kinds", &self.infix_parse_fns.keys())
            .field("nesting_depth", &self.nesting_depth)
            .finish()
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser with every Monkey expression handler registered, reading the first two
    /// tokens from the given lexer.
    #[must_use]
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            current_token,
            peek_token,
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
            nesting_depth: 0,
        };
        parser.register_expression_parse_fns();

        parser
    }

    /// Registers the handler that parses expressions starting with the given token kind, replacing
    /// the previous one.
    pub fn register_prefix(&mut self, kind: TokenKind, parse_fn: PrefixParseFn<'a>) {
        self.prefix_parse_fns.insert(kind, parse_fn);
    }

    /// Registers the handler that continues an expression when the given token kind follows it,
    /// replacing the previous one.
    pub fn register_infix(&mut self, kind: TokenKind, parse_fn: InfixParseFn<'a>) {
        self.infix_parse_fns.insert(kind, parse_fn);
    }

    /// Slides the token window forward by one token.
    pub fn next_token(&mut self) {
        self.current_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    /// Advances if the next token is of the given kind and returns it.
    ///
    /// # Errors
    /// - [`Error::UnexpectedToken`]: the next token is of a different kind; the window stays
    ///   where it is.
    pub fn expect_peek(&mut self, expected: TokenKind, handler: &dyn Handler<Error>) -> Option<Token> {
        if self.peek_token.is(expected) {
            self.next_token();
            Some(self.current_token.clone())
        } else {
            handler.receive(Error::UnexpectedToken(UnexpectedToken {
                expected,
                found: self.peek_token.clone(),
            }));
            None
        }
    }

    /// Gets the infix precedence of the next token.
    #[must_use]
    pub fn peek_precedence(&self) -> Precedence { Precedence::of(self.peek_token.kind) }

    /// Gets the infix precedence of the current token.
    #[must_use]
    pub fn current_precedence(&self) -> Precedence { Precedence::of(self.current_token.kind) }

    pub(crate) fn prefix_parse_fn(&self, kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        self.prefix_parse_fns.get(&kind).copied()
    }

    /// Runs `parse` one nesting level deeper, restoring the depth afterwards.
    pub(crate) fn nested<T>(
        &mut self,
        handler: &dyn Handler<Error>,
        parse: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        let depth = self.nesting_depth;
        let result = self.deepen(handler).and_then(|()| parse(self));
        self.nesting_depth = depth;

        result
    }

    /// Goes one nesting level deeper until the next [`Self::nested()`] call returns.
    pub(crate) fn deepen(&mut self, handler: &dyn Handler<Error>) -> Option<()> {
        if self.nesting_depth >= MAXIMUM_NESTING_DEPTH {
            handler.receive(Error::NestingTooDeep(NestingTooDeep {
                token: self.current_token.clone(),
            }));
            return None;
        }

        self.nesting_depth += 1;
        Some(())
    }

    pub(crate) fn infix_parse_fn(&self, kind: TokenKind) -> Option<InfixParseFn<'a>> {
        self.infix_parse_fns.get(&kind).copied()
    }
}

#[cfg(test)]
mod tests;
