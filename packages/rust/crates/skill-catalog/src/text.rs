//! Lossy text reading.
//!
//! Skill files are expected to be markdown, but the scanners pick up
//! anything with a `.md` extension, so reads must never fail on encoding.
//! Binary content is decoded like any other bytes; callers decide whether
//! the result is useful.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Read a file as text, replacing invalid UTF-8 with U+FFFD.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be opened or read.
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let buffer = fs::read(path).map_err(|e| CatalogError::io(path, e))?;

    match String::from_utf8(buffer) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_utf8() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("skill.md");
        fs::write(&p, "# Ünïcode title").unwrap();
        assert_eq!(read_text_lossy(&p).unwrap(), "# Ünïcode title");
    }

    #[test]
    fn test_read_invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("latin1.md");
        fs::write(&p, b"# Caf\xe9\n").unwrap();
        let text = read_text_lossy(&p).unwrap();
        assert_eq!(text, "# Caf\u{FFFD}\n");
    }

    #[test]
    fn test_read_nul_bytes_kept() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("blob.md");
        fs::write(&p, b"a\x00b\xff").unwrap();
        assert_eq!(read_text_lossy(&p).unwrap(), "a\u{0}b\u{FFFD}");
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_text_lossy(Path::new("/nonexistent/skill.md"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
