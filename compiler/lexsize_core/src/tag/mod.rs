//! Raw token tags produced by [`RawScanner`](crate::RawScanner).
//!
//! Discriminants are grouped into semantic ranges so category checks are
//! single comparisons:
//!
//! | Range     | Category                  |
//! |-----------|---------------------------|
//! | 0-15      | identifiers and literals  |
//! | 32-63     | operators                 |
//! | 80-95     | delimiters                |
//! | 112-127   | trivia                    |
//! | 240-254   | errors                    |
//! | 255       | end of input              |

/// Raw token kind. One byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    // === Identifiers & Literals ===
    Ident = 0,
    Int = 1,
    Float = 2,
    HexInt = 3,
    String = 4,
    Char = 5,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Equal = 37,
    EqualEqual = 38,
    BangEqual = 39,
    Less = 40,
    LessEqual = 41,
    Greater = 42,
    GreaterEqual = 43,
    Bang = 44,
    AmpAmp = 45,
    Amp = 46,
    PipePipe = 47,
    Pipe = 48,
    Caret = 49,
    Tilde = 50,
    PlusPlus = 51,
    MinusMinus = 52,
    Arrow = 53,
    Question = 54,

    // === Delimiters ===
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Semicolon = 86,
    Comma = 87,
    Colon = 88,
    Dot = 89,
    Hash = 90,

    // === Trivia ===
    Whitespace = 112,
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,

    // === Errors ===
    /// Byte that starts no token (control character, non-ASCII, `@`, ...).
    InvalidByte = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedComment = 243,
    /// NUL byte inside the source content.
    InteriorNull = 244,

    Eof = 255,
}

/// A `(tag, len)` pair. Position is implied by the running sum of lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

impl RawTag {
    /// Whitespace, newlines and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (112..128).contains(&(self as u8))
    }

    /// Tags that encode a lexical error.
    #[inline]
    pub fn is_error(self) -> bool {
        (240..255).contains(&(self as u8))
    }
}
