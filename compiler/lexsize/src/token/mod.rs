//! Token model handed from a scanner to the collector.
//!
//! A [`Token`] is transient: the scanner creates it, the collector consumes
//! it immediately. Its text payload is owned, so taking it into the
//! sequence and releasing it are mutually exclusive by construction.

use std::fmt;

use lexsize_core::RawTag;

/// One scanner result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<T> {
    /// A token that belongs in the output sequence.
    ///
    /// `text` is `None` for lexemes the scanner could not recognise; the
    /// collector stores that `None` as-is.
    Lexeme { kind: TokenKind, text: Option<T> },
    /// End of input. Scanners normally carry no text here, but if one does
    /// the collector releases it instead of storing it.
    Eof(Option<T>),
}

impl<T> Token<T> {
    /// A lexeme that owns `text`.
    pub fn lexeme(kind: TokenKind, text: T) -> Self {
        Token::Lexeme {
            kind,
            text: Some(text),
        }
    }

    /// A lexeme the scanner could not recognise.
    pub fn unknown() -> Self {
        Token::Lexeme {
            kind: TokenKind::Unknown,
            text: None,
        }
    }
}

/// A token's kind together with its text, for callers that want both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub text: Option<Box<str>>,
}

/// Token classification for the C-like language the scanner understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Statement keywords
    Print,
    If,
    Else,
    Elif,
    While,
    For,
    Return,
    Function,

    // Type keywords
    IntType,
    CharType,
    VoidType,
    FloatType,
    DoubleType,
    LongType,
    ShortType,
    SignedType,
    UnsignedType,
    BooleanType,
    Struct,
    Union,
    Enum,

    // Literals
    Integer,
    Float,
    String,
    Char,

    Identifier,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Bang,
    AmpAmp,
    Amp,
    PipePipe,
    Pipe,
    Caret,
    Tilde,
    PlusPlus,
    MinusMinus,
    Arrow,
    Question,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
    Dot,
    Hash,

    /// Unrecognised or malformed lexeme. Always paired with no text.
    Unknown,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Upper-case display name, e.g. `IDENTIFIER` or `LPAREN`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Print => "PRINT",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Elif => "ELIF",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Return => "RETURN",
            TokenKind::Function => "FUNCTION",
            TokenKind::IntType => "INT",
            TokenKind::CharType => "CHAR",
            TokenKind::VoidType => "VOID",
            TokenKind::FloatType => "FLOAT",
            TokenKind::DoubleType => "DOUBLE",
            TokenKind::LongType => "LONG",
            TokenKind::ShortType => "SHORT",
            TokenKind::SignedType => "SIGNED",
            TokenKind::UnsignedType => "UNSIGNED",
            TokenKind::BooleanType => "BOOLEAN",
            TokenKind::Struct => "STRUCT",
            TokenKind::Union => "UNION",
            TokenKind::Enum => "ENUM",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT_LITERAL",
            TokenKind::String => "STRING",
            TokenKind::Char => "CHAR_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "MULTIPLY",
            TokenKind::Slash => "DIVIDE",
            TokenKind::Percent => "MODULO",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EqEq => "EQUAL",
            TokenKind::NotEq => "NOT_EQUAL",
            TokenKind::Lt => "LESS",
            TokenKind::LtEq => "LESS_EQUAL",
            TokenKind::Gt => "GREATER",
            TokenKind::GtEq => "GREATER_EQUAL",
            TokenKind::Bang => "NOT",
            TokenKind::AmpAmp => "AND",
            TokenKind::Amp => "AMPERSAND",
            TokenKind::PipePipe => "OR",
            TokenKind::Pipe => "PIPE",
            TokenKind::Caret => "CARET",
            TokenKind::Tilde => "TILDE",
            TokenKind::PlusPlus => "INCREMENT",
            TokenKind::MinusMinus => "DECREMENT",
            TokenKind::Arrow => "ARROW",
            TokenKind::Question => "QUESTION",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::Hash => "HASH",
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Eof => "EOF",
        }
    }

    /// Kind for a non-identifier raw tag.
    ///
    /// Identifiers map to `Identifier`; keyword resolution happens in the
    /// lexer. Trivia and error tags map to `Unknown`.
    pub(crate) fn from_raw(tag: RawTag) -> Self {
        match tag {
            RawTag::Ident => TokenKind::Identifier,
            RawTag::Int | RawTag::HexInt => TokenKind::Integer,
            RawTag::Float => TokenKind::Float,
            RawTag::String => TokenKind::String,
            RawTag::Char => TokenKind::Char,
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Percent => TokenKind::Percent,
            RawTag::Equal => TokenKind::Assign,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::BangEqual => TokenKind::NotEq,
            RawTag::Less => TokenKind::Lt,
            RawTag::LessEqual => TokenKind::LtEq,
            RawTag::Greater => TokenKind::Gt,
            RawTag::GreaterEqual => TokenKind::GtEq,
            RawTag::Bang => TokenKind::Bang,
            RawTag::AmpAmp => TokenKind::AmpAmp,
            RawTag::Amp => TokenKind::Amp,
            RawTag::PipePipe => TokenKind::PipePipe,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::Caret => TokenKind::Caret,
            RawTag::Tilde => TokenKind::Tilde,
            RawTag::PlusPlus => TokenKind::PlusPlus,
            RawTag::MinusMinus => TokenKind::MinusMinus,
            RawTag::Arrow => TokenKind::Arrow,
            RawTag::Question => TokenKind::Question,
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Comma => TokenKind::Comma,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Hash => TokenKind::Hash,
            RawTag::Eof => TokenKind::Eof,
            RawTag::Whitespace
            | RawTag::Newline
            | RawTag::LineComment
            | RawTag::BlockComment
            | RawTag::InvalidByte
            | RawTag::UnterminatedString
            | RawTag::UnterminatedChar
            | RawTag::UnterminatedComment
            | RawTag::InteriorNull => TokenKind::Unknown,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
