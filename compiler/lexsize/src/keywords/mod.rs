//! Keyword resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter (keywords
//! are 2-8 bytes long, all lower-case ASCII), then matches against the
//! keywords of that length.

use crate::TokenKind;

/// Look up a reserved keyword, `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !(2..=8).contains(&bytes.len()) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::IntType),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "elif" => Some(TokenKind::Elif),
            "char" => Some(TokenKind::CharType),
            "void" => Some(TokenKind::VoidType),
            "long" => Some(TokenKind::LongType),
            "enum" => Some(TokenKind::Enum),
            _ => None,
        },
        5 => match text {
            "print" => Some(TokenKind::Print),
            "while" => Some(TokenKind::While),
            "float" => Some(TokenKind::FloatType),
            "short" => Some(TokenKind::ShortType),
            "union" => Some(TokenKind::Union),
            _ => None,
        },
        6 => match text {
            "return" => Some(TokenKind::Return),
            "double" => Some(TokenKind::DoubleType),
            "signed" => Some(TokenKind::SignedType),
            "struct" => Some(TokenKind::Struct),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(TokenKind::BooleanType),
            _ => None,
        },
        8 => match text {
            "function" => Some(TokenKind::Function),
            "unsigned" => Some(TokenKind::UnsignedType),
            _ => None,
        },
        _ => None,
    }
}
