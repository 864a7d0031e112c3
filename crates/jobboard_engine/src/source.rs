use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("markup file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read markup: {0}")]
    Io(#[from] io::Error),
}

/// Reads a listing page from disk. Invalid UTF-8 is replaced rather than rejected.
pub fn load_markup(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(path.to_path_buf()),
        _ => SourceError::Io(err),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
