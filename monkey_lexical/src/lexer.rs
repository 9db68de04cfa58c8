//! Contains the [`Lexer`], which scans the source code into [`Token`]s on demand.

use std::sync::Arc;

use monkey_base::source_file::{self, ByteIndex, SourceFile, Span};

use crate::token::{Token, TokenKind};

/// Scans a [`SourceFile`] into [`Token`]s, one token per [`Lexer::next_token()`] call.
///
/// The lexer only moves forward and looks at most one character ahead. Characters that do not start
/// any token become [`TokenKind::Illegal`] tokens instead of errors; rejecting them is up to the
/// parser.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    iter: source_file::Iterator<'a>,

    /// Byte index of `character`, or the length of the source once it is exhausted.
    position: ByteIndex,

    /// The character under examination; `None` past the end of the source.
    character: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the first character of the given source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        let mut lexer = Self {
            iter: source_file.iter(),
            position: 0,
            character: None,
        };
        lexer.read_char();

        lexer
    }

    /// Gets the source file being scanned.
    #[must_use]
    pub fn source_file(&self) -> &'a Arc<SourceFile> { self.iter.source_file() }

    /// Gets the byte index the next character would be read from.
    #[must_use]
    pub fn read_position(&self) -> ByteIndex {
        self.character
            .map_or(self.position, |character| self.position + character.len_utf8())
    }

    /// Scans the next token and moves past it.
    ///
    /// Once the source is exhausted every call returns a [`TokenKind::Eof`] token with an empty
    /// span at the end of the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(character) = self.character else {
            return Token::new(TokenKind::Eof, self.span_from(start));
        };

        let kind = match character {
            '=' => self.either_or_equal(TokenKind::Assign, TokenKind::Equal),
            '!' => self.either_or_equal(TokenKind::Bang, TokenKind::NotEqual),

            // words and numbers already stop on the character after them
            character if is_letter(character) => {
                self.walk(is_letter);
                let span = self.span_from(start);

                return Token::new(TokenKind::lookup_identifier(span.str()), span);
            }
            character if character.is_ascii_digit() => {
                self.walk(|character| character.is_ascii_digit());

                return Token::new(TokenKind::Integer, self.span_from(start));
            }

            character => TokenKind::from_punctuation(character).unwrap_or(TokenKind::Illegal),
        };

        self.read_char();
        Token::new(kind, self.span_from(start))
    }

    fn read_char(&mut self) {
        if let Some((index, character)) = self.iter.next() {
            self.position = index;
            self.character = Some(character);
        } else {
            self.position = self.source_file().content().len();
            self.character = None;
        }
    }

    fn peek_char(&mut self) -> Option<char> { self.iter.peek().map(|(_, character)| character) }

    /// Consumes the current character when the next one is `=`, producing the two-character kind.
    fn either_or_equal(&mut self, single: TokenKind, double: TokenKind) -> TokenKind {
        if self.peek_char() == Some('=') {
            self.read_char();
            double
        } else {
            single
        }
    }

    fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while self.character.is_some_and(&predicate) {
            self.read_char();
        }
    }

    fn skip_whitespace(&mut self) {
        self.walk(|character| matches!(character, ' ' | '\t' | '\n' | '\r'));
    }

    fn span_from(&self, start: ByteIndex) -> Span {
        Span::new(self.source_file().clone(), start, self.position)
            .expect("the cursor always rests on a character boundary")
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token before the end of the source, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

fn is_letter(character: char) -> bool { character.is_ascii_alphabetic() || character == '_' }

#[cfg(test)]
mod tests;
