//! Utility functions for error handling
//!
//! Helpers that attach context to the few file operations the crate performs
//! (loading record snapshots and configuration documents).

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PredictionError, Result};

/// Read a file to string, turning the common failure modes into descriptive errors
///
/// # Arguments
/// * `path` - The path to the file to read
/// * `purpose` - Why the file is being read (for error context)
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    if !path.exists() {
        return Err(PredictionError::NotFound(format!(
            "{} (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(PredictionError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file (expected for: {purpose})", path.display()),
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        let context = match e.kind() {
            io::ErrorKind::PermissionDenied => "permission denied - check file permissions",
            io::ErrorKind::InvalidData => "file contains invalid UTF-8 data",
            _ => "failed to read file content",
        };
        PredictionError::Io(io::Error::new(
            e.kind(),
            format!("{}: {context} ({purpose}): {e}", path.display()),
        ))
    })
}

/// Read and decode a JSON document
pub fn read_json<T>(path: &Path, purpose: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = safe_read_to_string(path, purpose)?;
    Ok(serde_json::from_str(&content)?)
}
