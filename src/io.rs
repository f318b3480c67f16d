//! File-side helper around the pure engine.
//!
//! The engine itself never touches the file system; this module is the
//! caller-side glue that reads a whole file into memory, computes the
//! selected digest and hands back the formatted string. Read failures are
//! surfaced as errors, never folded into a digest.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::algorithm::Algorithm;
use crate::engine;

#[derive(Debug, Error)]
pub enum ChecksumError {
    #[error("cannot checksum a directory: {path}")]
    IsDirectory { path: PathBuf },

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads `path` fully into memory and returns the formatted digest.
///
/// Directories are rejected up front; the engine only ever sees file
/// contents. The file is buffered whole, so callers wanting to bound
/// memory or latency should check the size first.
pub fn checksum_file(path: &Path, algorithm: Algorithm) -> Result<String, ChecksumError> {
    if path.is_dir() {
        return Err(ChecksumError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let data = fs::read(path)?;
    Ok(engine::compute(&data, algorithm).to_hex())
}
