//! Contains the main evaluation function.

use derive_more::From;
use enum_as_inner::EnumAsInner;
use monkey_syntax::syntax_tree::{expression::Expression, program::Program, statement::Statement};

use self::value::Value;

pub mod value;

/// Is a reference to any node of the syntax tree that can be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Expression(&'a Expression),
}

/// Evaluates the given node.
///
/// A program evaluates to its last statement and an expression statement to its expression. Among
/// expressions only integer literals produce a [`Value`] yet.
///
/// # Returns
///
/// Returns `None` for every node that does not produce a value.
#[must_use]
pub fn evaluate(node: Node) -> Option<Value> {
    match node {
        Node::Program(program) => program
            .statements()
            .last()
            .and_then(|statement| evaluate(Node::Statement(statement))),

        Node::Statement(Statement::Expression(statement)) => statement
            .expression()
            .as_ref()
            .and_then(|expression| evaluate(Node::Expression(expression))),
        Node::Statement(Statement::Let(..) | Statement::Return(..) | Statement::Block(..)) => None,

        Node::Expression(Expression::IntegerLiteral(integer)) => {
            Some(Value::Integer(integer.value()))
        }
        Node::Expression(_) => None,
    }
}
