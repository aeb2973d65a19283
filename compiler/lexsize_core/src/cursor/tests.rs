use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.cursor().current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    cursor.advance_n(2);
    assert!(cursor.is_eof());
}

#[test]
fn peek_near_end_returns_sentinel() {
    let buf = SourceBuffer::new("ab");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn empty_source_is_eof_immediately() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.source_len(), 0);
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

// === Slicing ===

#[test]
fn slice_returns_source_text() {
    let buf = SourceBuffer::new("return x;");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 6), Some("return"));
    assert_eq!(cursor.slice(7, 8), Some("x"));
}

#[test]
fn slice_clamps_to_source_length() {
    let buf = SourceBuffer::new("ab");
    assert_eq!(buf.cursor().slice(0, 10), Some("ab"));
}

#[test]
fn slice_inside_multibyte_char_is_none() {
    let buf = SourceBuffer::new("\u{e9}");
    assert_eq!(buf.cursor().slice(0, 1), None);
}

// === Bulk Scanning ===

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b.is_ascii_alphabetic());
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_skips_horizontal_space_only() {
    let buf = SourceBuffer::new(" \t\r\x0B\x0Cx\n");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn advance_char_skips_whole_character() {
    let buf = SourceBuffer::new("\u{1F600}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn eat_until_newline_positions_on_newline() {
    let buf = SourceBuffer::new("// note\nx");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.current(), b'\n');
    assert_eq!(cursor.pos(), 7);
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let buf = SourceBuffer::new("// note");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn block_comment_body_closed() {
    let buf = SourceBuffer::new("/* a * b */x");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(cursor.eat_block_comment_body());
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn block_comment_body_unclosed() {
    let buf = SourceBuffer::new("/* never closed");
    let mut cursor = buf.cursor();
    cursor.advance_n(2);
    assert!(!cursor.eat_block_comment_body());
    assert!(cursor.is_eof());
}

#[test]
fn skip_to_quote_delim_finds_each_delimiter() {
    let buf = SourceBuffer::new("abc\\\"def\"");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'\\');
    assert_eq!(cursor.pos(), 3);
    cursor.advance_n(2);
    assert_eq!(cursor.skip_to_quote_delim(b'"'), b'"');
    assert_eq!(cursor.pos(), 8);
}

#[test]
fn skip_to_quote_delim_stops_at_newline_and_eof() {
    let buf = SourceBuffer::new("ab\ncd");
    let mut cursor = buf.cursor();
    assert_eq!(cursor.skip_to_quote_delim(b'\''), b'\n');
    cursor.advance();
    assert_eq!(cursor.skip_to_quote_delim(b'\''), 0);
    assert!(cursor.is_eof());
}
