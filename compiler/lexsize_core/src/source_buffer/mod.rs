//! Owned, sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content so
//! the scanner can detect end of input without explicit bounds checks. The
//! total size is rounded up to the next 64-byte boundary, which also leaves
//! zeroed padding for `peek()` and `peek2()` near the end.
//!
//! A `SourceBuffer` is the unit of ownership handed to the token collector:
//! it is moved in, scanned, and dropped exactly once.
//!
//! # Encoding Detection
//!
//! Construction records two kinds of problems as [`EncodingIssue`] values:
//! a leading UTF-8 BOM and interior NUL bytes. They are not fatal; the CLI
//! reports them as warnings and the scanner skips interior NULs.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned source text terminated by a `0x00` sentinel.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected while building a [`SourceBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at the start of the file.
    Utf8Bom,
    /// NUL byte (U+0000) inside the source content.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Short human-readable description, used for CLI warnings.
    pub fn describe(self) -> &'static str {
        match self {
            EncodingIssueKind::Utf8Bom => "UTF-8 byte order mark",
            EncodingIssueKind::InteriorNull => "interior NUL byte",
        }
    }
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes().to_vec())
    }

    /// Build the buffer in place, reusing `bytes` as backing storage.
    ///
    /// Callers must pass bytes that came from a `str`.
    fn from_bytes(mut bytes: Vec<u8>) -> Self {
        let source_len = bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(&bytes, &mut encoding_issues);

        // Sentinel and padding are zero-filled.
        bytes.resize(padded_len, 0);

        // Files over 4 GiB saturate; the CLI rejects them before getting here.
        let source_len = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf: bytes,
            source_len,
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

impl From<String> for SourceBuffer {
    /// Take ownership of `source` without copying its bytes.
    fn from(source: String) -> Self {
        Self::from_bytes(source.into_bytes())
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }

    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos: p,
                len: 1,
            });
        }
        offset = absolute + 1;
    }
}

#[cfg(test)]
mod tests;
