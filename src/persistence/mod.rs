//! Small-file persistence
//!
//! Features:
//! - Scalar text files (one decimal integer)
//! - Atomic replace (write tmp, then rename over the target)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from reading or writing persisted files
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

impl PersistError {
    /// The file simply isn't there yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Read a file holding a single non-negative integer (surrounding whitespace ok)
pub fn read_scalar(path: &Path) -> Result<u32, PersistError> {
    let text = fs::read_to_string(path)?;
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| PersistError::Parse(format!("{:?}: {}", trimmed, e)))
}

/// Overwrite `path` with `value` in decimal
pub fn write_scalar(path: &Path, value: u32) -> Result<(), PersistError> {
    write_atomic(path, value.to_string().as_bytes())
}

/// Write `bytes` to a sibling tmp file and rename it over `path`
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Fresh scratch directory for file tests
#[cfg(test)]
pub(crate) fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("grid-snake-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create test dir");
    dir
}
