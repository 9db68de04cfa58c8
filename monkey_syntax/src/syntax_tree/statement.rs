//! Contains the syntax trees related to statements and their parsing logic.

use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::Getters;
use monkey_base::diagnostic::Handler;
use monkey_lexical::token::{KeywordKind, Token, TokenKind};

use super::expression::{Expression, Identifier};
use crate::{
    error::Error,
    parser::{Parser, Precedence},
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Statement:
///     Let
///     | Return
///     | ExpressionStatement
///     | Block
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Statement {
    Let(Let),
    Return(Return),
    Expression(ExpressionStatement),
    Block(Block),
}

impl Statement {
    /// Gets the literal of the token that introduced the statement.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Let(let_) => let_.token.literal(),
            Self::Return(return_) => return_.token.literal(),
            Self::Expression(expression) => expression.token.literal(),
            Self::Block(block) => block.token.literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let(let_) => let_.fmt(f),
            Self::Return(return_) => return_.fmt(f),
            Self::Expression(expression) => expression.fmt(f),
            Self::Block(block) => block.fmt(f),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Let:
///     'let' Identifier '=' Expression ';'?
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Let {
    #[get = "pub"]
    token: Token,
    #[get = "pub"]
    name: Identifier,

    /// Gets the bound expression; [`None`] if it failed to parse.
    #[get = "pub"]
    value: Option<Expression>,
}

impl Let {
    /// Dissolves the [`Let`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Token, Identifier, Option<Expression>) {
        (self.token, self.name, self.value)
    }
}

impl Display for Let {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token.literal(), self.name)?;

        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }

        f.write_str(";")
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Return:
///     'return' Expression? ';'?
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Return {
    #[get = "pub"]
    token: Token,

    /// Gets the returned expression; [`None`] for a bare `return;` or if it failed to parse.
    #[get = "pub"]
    value: Option<Expression>,
}

impl Display for Return {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token.literal())?;

        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }

        f.write_str(";")
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// ExpressionStatement:
///     Expression ';'?
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ExpressionStatement {
    /// Gets the first token of the expression.
    #[get = "pub"]
    token: Token,

    /// Gets the expression; [`None`] if it failed to parse.
    #[get = "pub"]
    expression: Option<Expression>,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.expression
            .as_ref()
            .map_or(Ok(()), |expression| write!(f, "{expression}"))
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Block:
///     '{' Statement* '}'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Block {
    /// Gets the opening `{` token.
    #[get = "pub"]
    token: Token,
    #[get = "pub"]
    statements: Vec<Statement>,
}

impl Block {
    /// Dissolves the [`Block`] into its statements.
    #[must_use]
    pub fn dissolve(self) -> Vec<Statement> { self.statements }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{ ")?;

        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }

        f.write_str("}")
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Statement`] starting at the current token.
    ///
    /// The parser is left on the last token of the statement.
    ///
    /// # Errors
    /// - [`Error::UnexpectedToken`]: a `let` is not followed by an identifier and `=`; no statement
    ///   is produced.
    /// - any error reported while parsing the expressions of the statement.
    pub fn parse_statement(&mut self, handler: &dyn Handler<Error>) -> Option<Statement> {
        match self.current_token().kind {
            TokenKind::Keyword(KeywordKind::Let) => self.parse_let(handler).map(Statement::Let),
            TokenKind::Keyword(KeywordKind::Return) => {
                Some(Statement::Return(self.parse_return(handler)))
            }
            _ => Some(Statement::Expression(
                self.parse_expression_statement(handler),
            )),
        }
    }

    /// Parses the statements after the opening `{`, up to the closing `}` or the end of the file.
    ///
    /// # Errors
    /// - [`Error::NestingTooDeep`]: the block nests deeper than
    ///   [`crate::parser::MAXIMUM_NESTING_DEPTH`]; the parser stays on the `{`.
    /// - any error reported while parsing the statements of the block.
    pub fn parse_block(&mut self, handler: &dyn Handler<Error>) -> Option<Block> {
        self.nested(handler, |parser| {
            let token = parser.current_token().clone();
            let mut statements = Vec::new();

            parser.next_token();

            while !parser.current_token().is(TokenKind::RightBrace)
                && !parser.current_token().is(TokenKind::Eof)
            {
                if let Some(statement) = parser.parse_statement(handler) {
                    statements.push(statement);
                }

                parser.next_token();
            }

            Some(Block { token, statements })
        })
    }

    fn parse_let(&mut self, handler: &dyn Handler<Error>) -> Option<Let> {
        let token = self.current_token().clone();

        let name = self.parse_identifier(handler)?;
        self.expect_peek(TokenKind::Assign, handler)?;

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest, handler);
        self.skip_semicolon();

        Some(Let { token, name, value })
    }

    fn parse_return(&mut self, handler: &dyn Handler<Error>) -> Return {
        let token = self.current_token().clone();

        let value = if self.peek_token().is(TokenKind::Semicolon) {
            None
        } else {
            self.next_token();
            self.parse_expression(Precedence::Lowest, handler)
        };
        self.skip_semicolon();

        Return { token, value }
    }

    fn parse_expression_statement(&mut self, handler: &dyn Handler<Error>) -> ExpressionStatement {
        let token = self.current_token().clone();

        let expression = self.parse_expression(Precedence::Lowest, handler);
        self.skip_semicolon();

        ExpressionStatement { token, expression }
    }

    fn skip_semicolon(&mut self) {
        if self.peek_token().is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
