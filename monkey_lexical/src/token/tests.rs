use std::str::FromStr;

use proptest::{prop_assert_eq, proptest};
use strum::IntoEnumIterator;

use super::{KeywordKind, TokenKind};

#[test]
fn keyword_table_covers_every_keyword() {
    for keyword in KeywordKind::iter() {
        assert_eq!(KeywordKind::from_str(keyword.as_str()), Ok(keyword));
        assert_eq!(
            TokenKind::lookup_identifier(keyword.as_str()),
            TokenKind::Keyword(keyword)
        );
    }
}

#[test]
fn keyword_lookup_is_case_sensitive() {
    assert_eq!(TokenKind::lookup_identifier("Let"), TokenKind::Identifier);
    assert_eq!(TokenKind::lookup_identifier("FN"), TokenKind::Identifier);
    assert_eq!(TokenKind::lookup_identifier("function"), TokenKind::Identifier);
}

#[test]
fn diagnostic_names() {
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
    assert_eq!(TokenKind::Integer.to_string(), "INT");
    assert_eq!(TokenKind::NotEqual.to_string(), "!=");
    assert_eq!(TokenKind::Keyword(KeywordKind::Function).to_string(), "FUNCTION");
    assert_eq!(KeywordKind::Function.to_string(), "fn");
}

proptest! {
    #[test]
    fn punctuation_names_round_trip(character in proptest::char::any()) {
        if let Some(kind) = TokenKind::from_punctuation(character) {
            prop_assert_eq!(kind.name(), character.to_string());
        }
    }
}
