// Chunk: docs/chunks/file_save - Whole-file text reads and writes
//!
//! Reading and writing tab contents to disk.
//!
//! Files are read and written whole, as UTF-8, with no line-ending
//! normalization. Failures carry the path so they can be shown to the user.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading or persisting a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8 text", .path.display())]
    Decode { path: PathBuf },
    /// The file could not be written.
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocumentError {
    /// The path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            DocumentError::Read { path, .. }
            | DocumentError::Decode { path }
            | DocumentError::Write { path, .. } => path,
        }
    }
}

/// Reads the whole file at `path` as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| DocumentError::Decode {
        path: path.to_path_buf(),
    })
}

/// Writes `text` to `path` as UTF-8, replacing any existing content.
///
/// Parent directories are not created.
pub fn write_text(path: &Path, text: &str) -> Result<(), DocumentError> {
    fs::write(path, text.as_bytes()).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_preserves_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crlf.txt");

        write_text(&path, "one\r\ntwo\n✓").unwrap();
        assert_eq!(fs::read(&path).unwrap(), "one\r\ntwo\n✓".as_bytes());
        assert_eq!(read_text(&path).unwrap(), "one\r\ntwo\n✓");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Decode { .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("a.txt");

        let err = write_text(&path, "hello").unwrap_err();
        assert!(matches!(err, DocumentError::Write { .. }));
        assert!(!path.exists());
    }
}
