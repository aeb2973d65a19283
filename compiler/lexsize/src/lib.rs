//! Token collection for lexsize.
//!
//! Turns a [`SourceBuffer`] into an ordered [`TokenSeq`] of owned token
//! texts:
//!
//! ```text
//! SourceBuffer → Lexer (cooking) → Token<Box<str>> → Collector → TokenSeq
//! ```
//!
//! The [`Collector`] is generic over [`ScanSource`], so the same
//! accumulation and rollback logic serves the real lexer, the
//! kind-preserving [`Classified`] variant, and scripted sources in tests.

mod collector;
mod keywords;
mod lexer;
mod seq;
mod source;
mod token;

pub use collector::{CollectError, Collector};
pub use lexer::{ClassifiedLexer, Lexer};
pub use lexsize_core::SourceBuffer;
pub use seq::{GrowError, GrowthPolicy, TokenSeq};
pub use source::{Classified, ScanSource, TokenScanner};
pub use token::{Lexeme, Token, TokenKind};

/// Collect every token text in `source` with the default growth policy.
pub fn collect(source: SourceBuffer) -> Result<TokenSeq<Box<str>>, CollectError> {
    Collector::default().collect(source)
}
