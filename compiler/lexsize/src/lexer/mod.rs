//! Token cooking layer.
//!
//! Turns `(RawTag, len)` pairs from the raw scanner into [`Token`] values
//! with owned text:
//!
//! ```text
//! SourceBuffer → RawScanner → (RawTag, len) → Lexer → Token<Box<str>>
//! ```
//!
//! - **A leading BOM** is skipped.
//! - **Trivia** (whitespace, newlines, comments) is skipped.
//! - **Identifiers** go through keyword lookup.
//! - **Interior NUL bytes** are skipped; `SourceBuffer::encoding_issues()`
//!   already reports them.
//! - **Error tags** become `Unknown` lexemes with no text.
//!
//! Everything else keeps its exact source text. Escapes in string and char
//! literals are not decoded.

use lexsize_core::{Cursor, RawScanner, RawTag, SourceBuffer};

use crate::keywords;
use crate::source::TokenScanner;
use crate::token::{Lexeme, Token, TokenKind};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Scanner over a [`SourceBuffer`] producing tokens with owned text.
pub struct Lexer<'a> {
    raw: RawScanner<'a>,
    /// Read-only view used to slice token text.
    text: Cursor<'a>,
    /// Byte offset of the next raw token.
    pos: u32,
}

impl<'a> Lexer<'a> {
    /// Start at the beginning of `source`, past a leading UTF-8 BOM.
    pub fn new(source: &'a SourceBuffer) -> Self {
        let text = source.cursor();
        let mut start = text;
        let mut pos = 0;
        if source.as_bytes().starts_with(UTF8_BOM) {
            start.advance_n(3);
            pos = 3;
        }
        Self {
            raw: RawScanner::new(start),
            text,
            pos,
        }
    }

    /// Produce the next significant token.
    ///
    /// After the end of input every call returns `Token::Eof(None)`.
    pub fn next_token(&mut self) -> Token<Box<str>> {
        loop {
            let start = self.pos;
            let raw = self.raw.next_token();
            self.pos += raw.len;
            match raw.tag {
                RawTag::Eof => return Token::Eof(None),
                RawTag::InteriorNull => {}
                tag if tag.is_trivia() => {}
                tag if tag.is_error() => return Token::unknown(),
                tag => return self.cook(tag, start),
            }
        }
    }

    fn cook(&self, tag: RawTag, start: u32) -> Token<Box<str>> {
        let Some(text) = self.text.slice(start, self.pos) else {
            return Token::unknown();
        };
        let kind = match tag {
            RawTag::Ident => keywords::lookup(text).unwrap_or(TokenKind::Identifier),
            other => TokenKind::from_raw(other),
        };
        Token::lexeme(kind, Box::from(text))
    }
}

impl TokenScanner for Lexer<'_> {
    type Text = Box<str>;

    #[inline]
    fn next_token(&mut self) -> Token<Box<str>> {
        Lexer::next_token(self)
    }
}

/// [`Lexer`] variant whose payload keeps the token kind next to the text.
///
/// Unrecognised lexemes still produce a payload (`text: None` inside), so
/// the kind survives collection.
pub struct ClassifiedLexer<'a> {
    inner: Lexer<'a>,
}

impl<'a> ClassifiedLexer<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        Self {
            inner: Lexer::new(source),
        }
    }
}

impl TokenScanner for ClassifiedLexer<'_> {
    type Text = Lexeme;

    fn next_token(&mut self) -> Token<Lexeme> {
        match self.inner.next_token() {
            Token::Lexeme { kind, text } => Token::lexeme(kind, Lexeme { kind, text }),
            Token::Eof(trailing) => Token::Eof(trailing.map(|text| Lexeme {
                kind: TokenKind::Eof,
                text: Some(text),
            })),
        }
    }
}
