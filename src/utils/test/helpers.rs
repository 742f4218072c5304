//! Test helper functions

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::Result;

/// Serialize a value into a JSON file under the system temp directory
///
/// The file name is prefixed with the process id so parallel test binaries do
/// not clash.
pub fn write_temp_json<T: Serialize>(name: &str, value: &T) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("{}-{name}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
    Ok(path)
}

/// Timed execution of a function
pub fn timed_execution<T, F>(func: F) -> (Duration, T)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = func();
    (start.elapsed(), result)
}
