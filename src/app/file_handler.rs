//! Reads the edge list from the location named on the command line.
//!
//! A path of `-` means standard input; anything else is read as a file.
//! The whole input is read up front so that a read failure aborts the run
//! before any graph is built.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::error::AppError;
use super::verbose_println;

/// Returns `true` if `path` names standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Reads the entire input source into a `String`.
///
/// # Arguments
/// * `input_path` - File path, or `-` for standard input.
/// * `verbose` - Whether to log which source is being read.
///
/// # Errors
/// Returns `AppError::ReadInput` naming the source if it cannot be read
/// (missing file, permission denied, invalid UTF-8).
pub fn read_input(input_path: &Path, verbose: bool) -> Result<String, AppError> {
    if is_stdin(input_path) {
        verbose_println!(verbose, "Reading edge list from <stdin>");
        let mut data = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut data)
            .map_err(|source| AppError::ReadInput {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(data);
    }

    verbose_println!(verbose, "Reading edge list from {}", input_path.display());
    fs::read_to_string(input_path).map_err(|source| AppError::ReadInput {
        path: input_path.display().to_string(),
        source,
    })
}
