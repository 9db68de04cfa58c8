//! Contains the [`Program`] syntax tree, the root of every parsed source file.

use std::fmt::Display;

use getset::Getters;
use monkey_base::diagnostic::Handler;
use monkey_lexical::token::TokenKind;

use super::statement::Statement;
use crate::{error::Error, parser::Parser};

/// Is the root of the syntax tree: the statements of a source file in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Program {
    #[get = "pub"]
    statements: Vec<Statement>,
}

impl Program {
    /// Dissolves the [`Program`] into a list of [`Statement`]s.
    #[must_use]
    pub fn dissolve(self) -> Vec<Statement> { self.statements }

    /// Gets the literal of the token that introduced the first statement, or an empty string for
    /// an empty program.
    #[must_use]
    pub fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Statement::token_literal)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }

        Ok(())
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Program`] from the current token to the end of the file.
    ///
    /// Statements that fail to parse are left out; their errors are reported to the handler and
    /// parsing resumes from the next token.
    pub fn parse_program(&mut self, handler: &dyn Handler<Error>) -> Program {
        let mut statements = Vec::new();

        while !self.current_token().is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement(handler) {
                statements.push(statement);
            }

            self.next_token();
        }

        Program { statements }
    }
}
