use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    assert!(buf.encoding_issues().is_empty());
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("int x;");
    assert_eq!(buf.len(), 6);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"int x;");
    assert_eq!(buf.buf[6], 0);
}

#[test]
fn from_string_matches_new() {
    let owned = SourceBuffer::from(String::from("while (x) { x = x - 1; }"));
    let copied = SourceBuffer::new("while (x) { x = x - 1; }");
    assert_eq!(owned.buf, copied.buf);
    assert_eq!(owned.len(), copied.len());
}

#[test]
fn utf8_multibyte_source() {
    let source = "print \"h\u{e9}llo \u{1F600}\";";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let buf = SourceBuffer::from("x".repeat(len));
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {len}",
            buf.buf.len(),
        );
        assert!(buf.buf.len() > len);
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Encoding Issues ===

#[test]
fn detects_utf8_bom() {
    let buf = SourceBuffer::new("\u{FEFF}int x;");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        }]
    );
}

#[test]
fn bom_after_start_is_not_reported() {
    let buf = SourceBuffer::new("x\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn detects_interior_nulls() {
    let buf = SourceBuffer::new("a\0b\0");
    let positions: Vec<u32> = buf.encoding_issues().iter().map(|i| i.pos).collect();
    assert_eq!(positions, vec![1, 3]);
    assert!(buf
        .encoding_issues()
        .iter()
        .all(|i| i.kind == EncodingIssueKind::InteriorNull && i.len == 1));
}

#[test]
fn describe_is_human_readable() {
    assert_eq!(EncodingIssueKind::Utf8Bom.describe(), "UTF-8 byte order mark");
    assert_eq!(EncodingIssueKind::InteriorNull.describe(), "interior NUL byte");
}
