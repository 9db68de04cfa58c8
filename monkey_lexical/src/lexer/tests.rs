use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use lazy_static::lazy_static;
use monkey_base::source_file::SourceFile;
use monkey_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, prop_oneof, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};
use strum::IntoEnumIterator;

use super::Lexer;
use crate::token::{self, KeywordKind, TokenKind};

/// Represents an input for an identifier token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// The valid identifier string.
    pub string: String,
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[A-Za-z_]{1,16}"
            .prop_filter_map("filter out words reserved as keywords", |string| {
                if KeywordKind::from_str(&string).is_ok() {
                    None
                } else {
                    Some(Self { string })
                }
            })
            .boxed()
    }
}

/// Represents an input for any token with a fixed spelling: operators, delimiters and keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed {
    /// The kind of the token.
    pub kind: TokenKind,
}

impl Fixed {
    fn spelling(self) -> &'static str {
        match self.kind {
            TokenKind::Keyword(keyword) => keyword.as_str(),
            kind => kind.name(),
        }
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spelling())
    }
}

impl Arbitrary for Fixed {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        lazy_static! {
            static ref FIXED_KINDS: Vec<TokenKind> = [
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Bang,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::LeftParenthesis,
                TokenKind::RightParenthesis,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
            ]
            .into_iter()
            .chain(KeywordKind::iter().map(TokenKind::Keyword))
            .collect();
        }

        proptest::sample::select(FIXED_KINDS.as_slice())
            .prop_map(|kind| Self { kind })
            .boxed()
    }
}

/// Represents an input for a character that does not start any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Illegal {
    /// The offending character.
    pub character: char,
}

impl Display for Illegal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.character)
    }
}

impl Arbitrary for Illegal {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::char::any()
            .prop_filter_map("allows only characters that start no token", |character| {
                let starts_token = character.is_ascii_alphanumeric()
                    || character == '_'
                    || matches!(character, ' ' | '\t' | '\n' | '\r')
                    || TokenKind::from_punctuation(character).is_some();

                (!starts_token).then_some(Self { character })
            })
            .boxed()
    }
}

/// Represents an input for a single token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Token {
    Identifier(Identifier),
    Integer(u64),
    Fixed(Fixed),
    Illegal(Illegal),
}

impl Arbitrary for Token {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Identifier::arbitrary().prop_map(Self::Identifier),
            proptest::num::u64::ANY.prop_map(Self::Integer),
            Fixed::arbitrary().prop_map(Self::Fixed),
            Illegal::arbitrary().prop_map(Self::Illegal),
        ]
        .boxed()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(identifier) => Display::fmt(identifier, f),
            Self::Integer(integer) => Display::fmt(integer, f),
            Self::Fixed(fixed) => Display::fmt(fixed, f),
            Self::Illegal(illegal) => Display::fmt(illegal, f),
        }
    }
}

impl Input<&token::Token> for &Token {
    fn assert(self, output: &token::Token) -> TestCaseResult {
        let expected_kind = match self {
            Token::Identifier(..) => TokenKind::Identifier,
            Token::Integer(..) => TokenKind::Integer,
            Token::Fixed(fixed) => fixed.kind,
            Token::Illegal(..) => TokenKind::Illegal,
        };

        prop_assert_eq!(output.kind, expected_kind);
        prop_assert_eq!(output.literal(), self.to_string());

        Ok(())
    }
}

/// Represents an input for a run of insignificant characters between two tokens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WhiteSpaces {
    /// The whitespace characters.
    pub string: String,
}

impl Arbitrary for WhiteSpaces {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[ \t\r\n]{1,4}".prop_map(|string| Self { string }).boxed()
    }
}

impl Display for WhiteSpaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.string) }
}

fn lex_all(source: &str) -> Vec<token::Token> {
    let source_file = SourceFile::in_memory("<test>", source);
    Lexer::new(&source_file).collect()
}

fn kinds(source: &str) -> Vec<(TokenKind, String)> {
    lex_all(source)
        .into_iter()
        .map(|token| (token.kind, token.literal().to_owned()))
        .collect()
}

#[test]
fn single_character_tokens() {
    let source_file = SourceFile::in_memory("<test>", "=+(){},;");
    let mut lexer = Lexer::new(&source_file);

    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::LeftParenthesis, "("),
        (TokenKind::RightParenthesis, ")"),
        (TokenKind::LeftBrace, "{"),
        (TokenKind::RightBrace, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    for (index, (kind, literal)) in expected.into_iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind, "token {index}");
        assert_eq!(token.literal(), literal, "token {index}");
    }
}

#[test]
fn whole_program() {
    let source = "let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
\treturn true;
} else {
\treturn false;
}

10 == 10;
10 != 9;
";

    let expected = [
        (TokenKind::Keyword(KeywordKind::Let), "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Keyword(KeywordKind::Let), "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Keyword(KeywordKind::Let), "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Keyword(KeywordKind::Function), "fn"),
        (TokenKind::LeftParenthesis, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::RightParenthesis, ")"),
        (TokenKind::LeftBrace, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RightBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Keyword(KeywordKind::Let), "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::LeftParenthesis, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::RightParenthesis, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::GreaterThan, ">"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Keyword(KeywordKind::If), "if"),
        (TokenKind::LeftParenthesis, "("),
        (TokenKind::Integer, "5"),
        (TokenKind::LessThan, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::RightParenthesis, ")"),
        (TokenKind::LeftBrace, "{"),
        (TokenKind::Keyword(KeywordKind::Return), "return"),
        (TokenKind::Keyword(KeywordKind::True), "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RightBrace, "}"),
        (TokenKind::Keyword(KeywordKind::Else), "else"),
        (TokenKind::LeftBrace, "{"),
        (TokenKind::Keyword(KeywordKind::Return), "return"),
        (TokenKind::Keyword(KeywordKind::False), "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RightBrace, "}"),
        (TokenKind::Integer, "10"),
        (TokenKind::Equal, "=="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "10"),
        (TokenKind::NotEqual, "!="),
        (TokenKind::Integer, "9"),
        (TokenKind::Semicolon, ";"),
    ]
    .map(|(kind, literal)| (kind, literal.to_owned()));

    assert_eq!(kinds(source), expected);
}

#[test]
fn lookahead_does_not_consume() {
    assert_eq!(
        kinds("=!=!x==="),
        [
            (TokenKind::Assign, "=".to_owned()),
            (TokenKind::NotEqual, "!=".to_owned()),
            (TokenKind::Bang, "!".to_owned()),
            (TokenKind::Identifier, "x".to_owned()),
            (TokenKind::Equal, "==".to_owned()),
            (TokenKind::Assign, "=".to_owned()),
        ]
    );
}

#[test]
fn words_and_numbers_stop_at_the_other_class() {
    assert_eq!(
        kinds("abc123 9lives snake_case"),
        [
            (TokenKind::Identifier, "abc".to_owned()),
            (TokenKind::Integer, "123".to_owned()),
            (TokenKind::Integer, "9".to_owned()),
            (TokenKind::Identifier, "lives".to_owned()),
            (TokenKind::Identifier, "snake_case".to_owned()),
        ]
    );
}

#[test]
fn illegal_characters_are_tokens() {
    assert_eq!(
        kinds("a @ é\u{0}"),
        [
            (TokenKind::Identifier, "a".to_owned()),
            (TokenKind::Illegal, "@".to_owned()),
            (TokenKind::Illegal, "é".to_owned()),
            (TokenKind::Illegal, "\u{0}".to_owned()),
        ]
    );
}

#[test]
fn end_of_file_is_sticky() {
    let source_file = SourceFile::in_memory("<test>", "x  \n");
    let mut lexer = Lexer::new(&source_file);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal(), "");
        assert_eq!(token.span.start(), source_file.content().len());
    }
}

#[test]
fn empty_source() {
    let source_file = SourceFile::in_memory("<test>", "");
    let mut lexer = Lexer::new(&source_file);

    assert_eq!(lexer.read_position(), 0);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert!(lexer.next().is_none());
}

#[test]
fn read_position_runs_one_character_ahead() {
    let source_file = SourceFile::in_memory("<test>", "éa");
    let mut lexer = Lexer::new(&source_file);

    assert_eq!(lexer.read_position(), 2);
    assert_eq!(lexer.next_token().literal(), "é");
    assert_eq!(lexer.read_position(), 3);
    assert_eq!(lexer.next_token().literal(), "a");
    assert_eq!(lexer.read_position(), 3);
}

proptest! {
    #[test]
    fn single_token_test(input in Token::arbitrary()) {
        let source = input.to_string();
        let source_file = SourceFile::temp(&source)?;
        let mut lexer = Lexer::new(&source_file);

        input.assert(&lexer.next_token())?;
        prop_assert!(lexer.next_token().is(TokenKind::Eof));
        prop_assert!(lexer.next_token().is(TokenKind::Eof));
    }

    #[test]
    fn token_sequence_test(
        input in proptest::collection::vec((Token::arbitrary(), WhiteSpaces::arbitrary()), 0..32)
    ) {
        let mut source = String::new();
        for (token, white_spaces) in &input {
            write!(source, "{token}{white_spaces}").unwrap();
        }

        let tokens = lex_all(&source);
        let expected = input.into_iter().map(|(token, _)| token).collect::<Vec<_>>();

        expected.assert(&tokens)?;
    }

    #[test]
    fn digits_form_one_integer(digits in "[0-9]{1,40}") {
        let tokens = lex_all(&digits);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Integer);
        prop_assert_eq!(tokens[0].literal(), digits.as_str());
    }

    #[test]
    fn letters_form_one_word(word in "[A-Za-z_]{1,16}") {
        let tokens = lex_all(&word);

        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::lookup_identifier(&word));
        prop_assert_eq!(tokens[0].literal(), word.as_str());
    }
}
