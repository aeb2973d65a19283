use std::fs;

use pretty_assertions::assert_eq;

use super::*;

fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let file = match tempfile::NamedTempFile::new() {
        Ok(file) => file,
        Err(e) => panic!("cannot create temp file: {e}"),
    };
    if let Err(e) = fs::write(file.path(), contents) {
        panic!("cannot write temp file: {e}");
    }
    file
}

#[test]
fn loads_utf8_file() {
    let file = temp_file(b"int x;");
    let Ok(buf) = load_source(file.path()) else {
        panic!("load failed");
    };
    assert_eq!(buf.as_bytes(), b"int x;");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn missing_file_is_not_found() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("cannot create temp dir: {e}"),
    };
    let path = dir.path().join("absent.c");
    let Err(err) = load_source(&path) else {
        panic!("expected NotFound");
    };
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!("cannot find file '{}'", path.display())
    );
}

#[test]
fn invalid_utf8_reports_offset() {
    let file = temp_file(b"ab\xFFcd");
    let Err(err) = load_source(file.path()) else {
        panic!("expected InvalidUtf8");
    };
    assert!(matches!(err, LoadError::InvalidUtf8 { valid_up_to: 2, .. }));
}

#[test]
fn oversized_file_is_rejected_before_reading() {
    let file = temp_file(b"0123456789");
    let Err(err) = load_with_limit(file.path(), 4) else {
        panic!("expected TooLarge");
    };
    assert!(matches!(err, LoadError::TooLarge { len: 10, limit: 4, .. }));
}

#[test]
fn directory_is_an_io_error() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("cannot create temp dir: {e}"),
    };
    let Err(err) = load_source(dir.path()) else {
        panic!("reading a directory should fail");
    };
    assert!(matches!(
        err,
        LoadError::Io { .. } | LoadError::PermissionDenied { .. }
    ));
}
