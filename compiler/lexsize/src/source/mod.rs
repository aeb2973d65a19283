//! Seams between the collector and whatever produces tokens.
//!
//! [`ScanSource`] is the owned input the collector consumes; it hands out a
//! [`TokenScanner`] borrowing from itself. The collector keeps the source
//! alive for exactly as long as the scanner runs, then drops it.

use lexsize_core::SourceBuffer;

use crate::lexer::{ClassifiedLexer, Lexer};
use crate::token::{Lexeme, Token};

/// Produces one token per call from an evolving cursor.
///
/// Implementations must eventually return [`Token::Eof`] for finite input.
pub trait TokenScanner {
    /// Owned text payload carried by each token.
    type Text;

    fn next_token(&mut self) -> Token<Self::Text>;
}

/// Owned input that can be scanned.
pub trait ScanSource {
    type Text;
    type Scanner<'a>: TokenScanner<Text = Self::Text>
    where
        Self: 'a;

    /// Create a scanner positioned at the start of the input.
    fn scanner(&self) -> Self::Scanner<'_>;
}

impl ScanSource for SourceBuffer {
    type Text = Box<str>;
    type Scanner<'a> = Lexer<'a>;

    fn scanner(&self) -> Lexer<'_> {
        Lexer::new(self)
    }
}

/// A [`SourceBuffer`] whose tokens are collected together with their kind.
#[derive(Clone, Debug)]
pub struct Classified(SourceBuffer);

impl Classified {
    pub fn new(buffer: SourceBuffer) -> Self {
        Self(buffer)
    }
}

impl From<SourceBuffer> for Classified {
    fn from(buffer: SourceBuffer) -> Self {
        Self(buffer)
    }
}

impl ScanSource for Classified {
    type Text = Lexeme;
    type Scanner<'a> = ClassifiedLexer<'a>;

    fn scanner(&self) -> ClassifiedLexer<'_> {
        ClassifiedLexer::new(&self.0)
    }
}
