//! Low-level scanner for lexsize.
//!
//! Everything here is allocation-free once the [`SourceBuffer`] exists:
//!
//! ```text
//! SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```
//!
//! Keyword resolution, owned token text, and accumulation live in the
//! `lexsize` crate. This crate has no `lexsize_*` dependencies so tools can
//! reuse the scanner on its own.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
