//! Contains the syntax trees related to expressions and their parsing logic.

use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use monkey_base::diagnostic::Handler;
use monkey_lexical::token::{KeywordKind, Token, TokenKind};

use super::statement::Block;
use crate::{
    error::{Error, InvalidIntegerLiteral, NoPrefixParseFunction},
    parser::{Parser, Precedence},
};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Expression:
///     Identifier
///     | IntegerLiteral
///     | Boolean
///     | Prefix
///     | Infix
///     | If
///     | FunctionLiteral
///     | Call
///     | '(' Expression ')'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
#[allow(missing_docs)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(Boolean),
    Prefix(Prefix),
    Infix(Infix),
    If(If),
    FunctionLiteral(FunctionLiteral),
    Call(Call),
}

impl Expression {
    /// Gets the literal of the token that introduced the expression.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(identifier) => identifier.token.literal(),
            Self::IntegerLiteral(integer) => integer.token.literal(),
            Self::Boolean(boolean) => boolean.token.literal(),
            Self::Prefix(prefix) => prefix.token.literal(),
            Self::Infix(infix) => infix.token.literal(),
            Self::If(if_) => if_.token.literal(),
            Self::FunctionLiteral(function) => function.token.literal(),
            Self::Call(call) => call.token.literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => identifier.fmt(f),
            Self::IntegerLiteral(integer) => integer.fmt(f),
            Self::Boolean(boolean) => boolean.fmt(f),
            Self::Prefix(prefix) => prefix.fmt(f),
            Self::Infix(infix) => infix.fmt(f),
            Self::If(if_) => if_.fmt(f),
            Self::FunctionLiteral(function) => function.fmt(f),
            Self::Call(call) => call.fmt(f),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Identifier:
///     IDENT
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Identifier {
    #[get = "pub"]
    token: Token,
}

impl Identifier {
    /// Gets the name of the identifier.
    #[must_use]
    pub fn value(&self) -> &str { self.token.literal() }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.value()) }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// IntegerLiteral:
///     INT
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct IntegerLiteral {
    #[get = "pub"]
    token: Token,

    /// Gets the value of the literal.
    #[get_copy = "pub"]
    value: i64,
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Boolean:
///     'true'
///     | 'false'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct Boolean {
    #[get = "pub"]
    token: Token,

    /// Gets the value of the literal.
    #[get_copy = "pub"]
    value: bool,
}

impl Display for Boolean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token.literal())
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Prefix:
///     ('!' | '-') Expression
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Prefix {
    /// Gets the operator token.
    #[get = "pub"]
    token: Token,

    #[get = "pub"]
    operand: Box<Expression>,
}

impl Prefix {
    /// Gets the operator, such as `!` or `-`.
    #[must_use]
    pub fn operator(&self) -> &str { self.token.literal() }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator(), self.operand)
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Infix:
///     Expression ('+' | '-' | '*' | '/' | '==' | '!=' | '<' | '>') Expression
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Infix {
    /// Gets the operator token.
    #[get = "pub"]
    token: Token,

    #[get = "pub"]
    left_operand: Box<Expression>,

    #[get = "pub"]
    right_operand: Box<Expression>,
}

impl Infix {
    /// Gets the operator, such as `+` or `==`.
    #[must_use]
    pub fn operator(&self) -> &str { self.token.literal() }
}

impl Display for Infix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} {} {})",
            self.left_operand,
            self.operator(),
            self.right_operand
        )
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// If:
///     'if' '(' Expression ')' Block ('else' Block)?
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct If {
    #[get = "pub"]
    token: Token,
    #[get = "pub"]
    condition: Box<Expression>,
    #[get = "pub"]
    consequence: Block,
    #[get = "pub"]
    alternative: Option<Block>,
}

impl Display for If {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "if ({}) {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }

        Ok(())
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// FunctionLiteral:
///     'fn' '(' (Identifier (',' Identifier)*)? ')' Block
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct FunctionLiteral {
    #[get = "pub"]
    token: Token,
    #[get = "pub"]
    parameters: Vec<Identifier>,
    #[get = "pub"]
    body: Block,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.token.literal())?;
        write_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Call:
///     Expression '(' (Expression (',' Expression)*)? ')'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Call {
    /// Gets the `(` token opening the argument list.
    #[get = "pub"]
    token: Token,

    /// Gets the expression being called: an identifier, a function literal or any other
    /// expression.
    #[get = "pub"]
    function: Box<Expression>,

    #[get = "pub"]
    arguments: Vec<Expression>,
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.function)?;
        write_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}

fn write_separated<T: Display>(f: &mut std::fmt::Formatter<'_>, elements: &[T]) -> std::fmt::Result {
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{element}")?;
    }

    Ok(())
}

impl<'a> Parser<'a> {
    /// Parses an [`Expression`] starting at the current token, absorbing infix operators that bind
    /// tighter than `precedence`.
    ///
    /// The parser is left on the last token of the expression.
    ///
    /// # Errors
    /// - [`Error::NoPrefixParseFunction`]: the current token cannot start an expression.
    /// - [`Error::NestingTooDeep`]: the expression nests deeper than
    ///   [`crate::parser::MAXIMUM_NESTING_DEPTH`].
    /// - any error reported by the handlers of the tokens involved.
    pub fn parse_expression(
        &mut self,
        precedence: Precedence,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        self.nested(handler, |parser| parser.parse_operators(precedence, handler))
    }

    fn parse_operators(
        &mut self,
        precedence: Precedence,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fn(self.current_token().kind) else {
            handler.receive(Error::NoPrefixParseFunction(NoPrefixParseFunction {
                found: self.current_token().clone(),
            }));
            return None;
        };

        let mut left = prefix(self, handler)?;

        while !self.peek_token().is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fn(self.peek_token().kind) else {
                return Some(left);
            };

            self.next_token();

            // the folded tree grows one level deeper with every operator
            self.deepen(handler)?;
            left = infix(self, left, handler)?;
        }

        Some(left)
    }

    /// Advances onto the next token, which must be an identifier.
    ///
    /// # Errors
    /// - [`Error::UnexpectedToken`]: the next token is not an identifier.
    pub fn parse_identifier(&mut self, handler: &dyn Handler<Error>) -> Option<Identifier> {
        self.expect_peek(TokenKind::Identifier, handler)
            .map(|token| Identifier { token })
    }

    pub(crate) fn register_expression_parse_fns(&mut self) {
        self.register_prefix(TokenKind::Identifier, Self::parse_identifier_expression);
        self.register_prefix(TokenKind::Integer, Self::parse_integer_literal);
        self.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        self.register_prefix(
            TokenKind::Keyword(KeywordKind::True),
            Self::parse_boolean,
        );
        self.register_prefix(
            TokenKind::Keyword(KeywordKind::False),
            Self::parse_boolean,
        );
        self.register_prefix(TokenKind::LeftParenthesis, Self::parse_grouped_expression);
        self.register_prefix(TokenKind::Keyword(KeywordKind::If), Self::parse_if_expression);
        self.register_prefix(
            TokenKind::Keyword(KeywordKind::Function),
            Self::parse_function_literal,
        );

        for operator in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
        ] {
            self.register_infix(operator, Self::parse_infix_expression);
        }
        self.register_infix(TokenKind::LeftParenthesis, Self::parse_call_expression);
    }

    #[allow(clippy::unnecessary_wraps)]
    fn parse_identifier_expression(&mut self, _: &dyn Handler<Error>) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.current_token().clone(),
        }))
    }

    fn parse_integer_literal(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();

        // digit runs only overflow, they are never malformed
        let Ok(value) = token.literal().parse::<i64>() else {
            handler.receive(Error::InvalidIntegerLiteral(InvalidIntegerLiteral { token }));
            return None;
        };

        Some(Expression::IntegerLiteral(IntegerLiteral { token, value }))
    }

    #[allow(clippy::unnecessary_wraps)]
    fn parse_boolean(&mut self, _: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();
        let value = token.is(TokenKind::Keyword(KeywordKind::True));

        Some(Expression::Boolean(Boolean { token, value }))
    }

    fn parse_prefix_expression(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();

        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix, handler)?;

        Some(Expression::Prefix(Prefix {
            token,
            operand: Box::new(operand),
        }))
    }

    fn parse_grouped_expression(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest, handler)?;
        self.expect_peek(TokenKind::RightParenthesis, handler)?;

        Some(expression)
    }

    fn parse_if_expression(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();

        self.expect_peek(TokenKind::LeftParenthesis, handler)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest, handler)?;
        self.expect_peek(TokenKind::RightParenthesis, handler)?;

        self.expect_peek(TokenKind::LeftBrace, handler)?;
        let consequence = self.parse_block(handler)?;

        let alternative = if self.peek_token().is(TokenKind::Keyword(KeywordKind::Else)) {
            self.next_token();
            self.expect_peek(TokenKind::LeftBrace, handler)?;

            Some(self.parse_block(handler)?)
        } else {
            None
        };

        Some(Expression::If(If {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self, handler: &dyn Handler<Error>) -> Option<Expression> {
        let token = self.current_token().clone();

        self.expect_peek(TokenKind::LeftParenthesis, handler)?;
        let parameters = self.parse_function_parameters(handler)?;

        self.expect_peek(TokenKind::LeftBrace, handler)?;
        let body = self.parse_block(handler)?;

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// Parses the identifiers after the opening `(`, up to and including the closing `)`.
    fn parse_function_parameters(&mut self, handler: &dyn Handler<Error>) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token().is(TokenKind::RightParenthesis) {
            self.next_token();
            return Some(parameters);
        }

        parameters.push(self.parse_identifier(handler)?);

        while self.peek_token().is(TokenKind::Comma) {
            self.next_token();
            parameters.push(self.parse_identifier(handler)?);
        }

        self.expect_peek(TokenKind::RightParenthesis, handler)?;

        Some(parameters)
    }

    fn parse_infix_expression(
        &mut self,
        left_operand: Expression,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        let token = self.current_token().clone();
        let precedence = self.current_precedence();

        // the same precedence on the right keeps operators left associative
        self.next_token();
        let right_operand = self.parse_expression(precedence, handler)?;

        Some(Expression::Infix(Infix {
            token,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }))
    }

    fn parse_call_expression(
        &mut self,
        function: Expression,
        handler: &dyn Handler<Error>,
    ) -> Option<Expression> {
        let token = self.current_token().clone();
        let arguments = self.parse_call_arguments(handler)?;

        Some(Expression::Call(Call {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Parses the expressions after the opening `(`, up to and including the closing `)`.
    fn parse_call_arguments(&mut self, handler: &dyn Handler<Error>) -> Option<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token().is(TokenKind::RightParenthesis) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest, handler)?);

        while self.peek_token().is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest, handler)?);
        }

        self.expect_peek(TokenKind::RightParenthesis, handler)?;

        Some(arguments)
    }
}
