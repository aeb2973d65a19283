//! Reading source files into a [`SourceBuffer`].

use std::io;
use std::path::{Path, PathBuf};

use lexsize_core::SourceBuffer;

/// Largest file the scanner can address with `u32` offsets.
const MAX_SOURCE_LEN: u64 = u32::MAX as u64;

/// Why a source file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data at byte {valid_up_to}", .path.display())]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
    #[error("'{}' is too large ({len} bytes, limit {limit})", .path.display())]
    TooLarge { path: PathBuf, len: u64, limit: u64 },
    #[error("error reading '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Read `path` into a sentinel-terminated buffer.
pub fn load_source(path: &Path) -> Result<SourceBuffer, LoadError> {
    load_with_limit(path, MAX_SOURCE_LEN)
}

pub(crate) fn load_with_limit(path: &Path, limit: u64) -> Result<SourceBuffer, LoadError> {
    let len = std::fs::metadata(path)
        .map_err(|e| io_error(path, e))?
        .len();
    if len > limit {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            len,
            limit,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded source");
    Ok(SourceBuffer::from(text))
}

fn io_error(path: &Path, e: io::Error) -> LoadError {
    let path = path.to_path_buf();
    match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound { path },
        io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
        _ => LoadError::Io { path, source: e },
    }
}

#[cfg(test)]
mod tests;
