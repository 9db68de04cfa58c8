use monkey_base::{diagnostic::Storage, source_file::SourceFile};
use monkey_lexical::{
    lexer::Lexer,
    token::{KeywordKind, TokenKind},
};

use super::{Parser, Precedence};
use crate::error::Error;

#[test]
fn window_is_primed_with_two_tokens() {
    let source_file = SourceFile::in_memory("<test>", "let x");
    let mut parser = Parser::new(Lexer::new(&source_file));

    assert!(parser
        .current_token()
        .is(TokenKind::Keyword(KeywordKind::Let)));
    assert_eq!(parser.peek_token().literal(), "x");

    parser.next_token();
    assert_eq!(parser.current_token().literal(), "x");
    assert!(parser.peek_token().is(TokenKind::Eof));

    parser.next_token();
    parser.next_token();
    assert!(parser.current_token().is(TokenKind::Eof));
    assert!(parser.peek_token().is(TokenKind::Eof));
}

#[test]
fn expect_peek_stays_on_mismatch() {
    let source_file = SourceFile::in_memory("<test>", "a = b");
    let mut parser = Parser::new(Lexer::new(&source_file));
    let storage: Storage<Error> = Storage::new();

    assert!(parser.expect_peek(TokenKind::Comma, &storage).is_none());
    assert_eq!(parser.current_token().literal(), "a");

    let assign = parser
        .expect_peek(TokenKind::Assign, &storage)
        .expect("the next token is `=`");
    assert_eq!(assign.literal(), "=");
    assert_eq!(parser.current_token(), &assign);

    let errors = storage.into_vec();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "expected next token to be ,, got = instead"
    );
}

#[test]
fn precedence_table() {
    assert!(Precedence::Lowest < Precedence::Equals);
    assert!(Precedence::Equals < Precedence::LessGreater);
    assert!(Precedence::LessGreater < Precedence::Sum);
    assert!(Precedence::Sum < Precedence::Product);
    assert!(Precedence::Product < Precedence::Prefix);
    assert!(Precedence::Prefix < Precedence::Call);

    for (kind, precedence) in [
        (TokenKind::Equal, Precedence::Equals),
        (TokenKind::NotEqual, Precedence::Equals),
        (TokenKind::LessThan, Precedence::LessGreater),
        (TokenKind::GreaterThan, Precedence::LessGreater),
        (TokenKind::Plus, Precedence::Sum),
        (TokenKind::Minus, Precedence::Sum),
        (TokenKind::Asterisk, Precedence::Product),
        (TokenKind::Slash, Precedence::Product),
        (TokenKind::LeftParenthesis, Precedence::Call),
        (TokenKind::Semicolon, Precedence::Lowest),
        (TokenKind::Bang, Precedence::Lowest),
        (TokenKind::Eof, Precedence::Lowest),
    ] {
        assert_eq!(Precedence::of(kind), precedence, "kind: {kind}");
    }
}

#[test]
fn registered_handlers_extend_the_grammar() {
    let source_file = SourceFile::in_memory("<test>", "{1 + 2} * 3");
    let mut parser = Parser::new(Lexer::new(&source_file));
    let storage: Storage<Error> = Storage::new();

    // braces as an alternative grouping
    parser.register_prefix(TokenKind::LeftBrace, |parser, handler| {
        parser.next_token();
        let expression = parser.parse_expression(Precedence::Lowest, handler)?;
        parser.expect_peek(TokenKind::RightBrace, handler)?;

        Some(expression)
    });

    let program = parser.parse_program(&storage);

    assert!(storage.is_empty());
    assert_eq!(program.to_string(), "((1 + 2) * 3)");
}
