//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner walks a sentinel-terminated [`Cursor`] and never allocates.
//! It does not resolve keywords or decode escapes; that is left to the
//! cooking layer in `lexsize`.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The
//! sentinel byte (`0x00`) dispatches to `eof()`. Lexical errors are encoded
//! as error tags rather than `Result::Err`, so scanning always continues to
//! the end of the input.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over one source buffer.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF keep returning `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | b'\r' | 0x0B | 0x0C => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString),
            b'\'' => self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.single(start, RawTag::Star),
            b'%' => self.single(start, RawTag::Percent),
            b'^' => self.single(start, RawTag::Caret),
            b'~' => self.single(start, RawTag::Tilde),
            b'?' => self.single(start, RawTag::Question),
            b'=' => self.one_or_two(start, b'=', RawTag::Equal, RawTag::EqualEqual),
            b'!' => self.one_or_two(start, b'=', RawTag::Bang, RawTag::BangEqual),
            b'<' => self.one_or_two(start, b'=', RawTag::Less, RawTag::LessEqual),
            b'>' => self.one_or_two(start, b'=', RawTag::Greater, RawTag::GreaterEqual),
            b'&' => self.one_or_two(start, b'&', RawTag::Amp, RawTag::AmpAmp),
            b'|' => self.one_or_two(start, b'|', RawTag::Pipe, RawTag::PipePipe),
            b'.' => self.dot(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            b':' => self.single(start, RawTag::Colon),
            b'#' => self.single(start, RawTag::Hash),
            // Other control characters, `@`, `$`, `` ` ``, `\`, DEL, non-ASCII
            _ => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ────────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(start, RawTag::InteriorNull)
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance_n(2);
                if self.cursor.eat_block_comment_body() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedComment)
                }
            }
            _ => self.single(start, RawTag::Slash),
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        self.token(start, RawTag::Ident)
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0'
            && matches!(self.cursor.peek(), b'x' | b'X')
            && self.cursor.peek2().is_ascii_hexdigit()
        {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            return self.token(start, RawTag::HexInt);
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        let mut tag = RawTag::Int;
        // `1.` without a digit after the dot stays an integer followed by `.`
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            tag = RawTag::Float;
        }
        if self.eat_exponent() {
            tag = RawTag::Float;
        }
        self.token(start, tag)
    }

    /// Consume `e[+-]digits` if present. A bare `e` is left for the next token.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let (skip, first_digit) = match self.cursor.peek() {
            b'+' | b'-' => (2, self.cursor.peek2()),
            other => (1, other),
        };
        if !first_digit.is_ascii_digit() {
            return false;
        }
        self.cursor.advance_n(skip);
        self.cursor.eat_while(|b| b.is_ascii_digit());
        true
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            self.eat_exponent();
            self.token(start, RawTag::Float)
        } else {
            self.single(start, RawTag::Dot)
        }
    }

    // ─── Strings & Chars ────────────────────────────────────────────────

    /// Scan a `"..."` or `'...'` literal. Escapes are skipped, not decoded.
    ///
    /// An unescaped newline or EOF before the closing quote produces the
    /// `unterminated` tag; the newline itself is left for the next token.
    fn quoted(&mut self, start: u32, quote: u8, ok: RawTag, unterminated: RawTag) -> RawToken {
        self.cursor.advance(); // opening quote
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return self.token(start, unterminated);
                    }
                    self.cursor.advance_char();
                }
                b'\n' | 0 => return self.token(start, unterminated),
                _ => {
                    self.cursor.advance(); // closing quote
                    return self.token(start, ok);
                }
            }
        }
    }

    // ─── Operators ──────────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `one` alone, or `two` when the next byte is `second`.
    fn one_or_two(&mut self, start: u32, second: u8, one: RawTag, two: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(start, two)
        } else {
            self.token(start, one)
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.one_or_two(start, b'+', RawTag::Plus, RawTag::PlusPlus)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'-' => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::MinusMinus)
            }
            b'>' => {
                self.cursor.advance_n(2);
                self.token(start, RawTag::Arrow)
            }
            _ => self.single(start, RawTag::Minus),
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }
}
