//! batch/paths.rs
//! Destination resolution.
//!
//! | target | output            | destination            |
//! |--------|-------------------|------------------------|
//! | file   | none              | the file itself        |
//! | file   | existing dir      | `output/<file name>`   |
//! | file   | anything else     | `output`               |
//! | dir    | none              | each entry itself      |
//! | dir    | dir (created)     | `output/<entry name>`  |

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::BatchError;

/// Destination for a single-file target.
pub fn file_destination(source: &Path, output: Option<&Path>) -> PathBuf {
    match output {
        None => source.to_path_buf(),
        Some(out) if out.is_dir() => match source.file_name() {
            Some(name) => out.join(name),
            None => out.to_path_buf(),
        },
        Some(out) => out.to_path_buf(),
    }
}

/// Destination for one entry of a directory target.
pub fn dir_entry_destination(source: &Path, output: Option<&Path>) -> PathBuf {
    match (output, source.file_name()) {
        (Some(out), Some(name)) => out.join(name),
        _ => source.to_path_buf(),
    }
}

/// Create the output directory of a directory run if it is missing.
pub fn ensure_output_dir(output: Option<&Path>) -> Result<(), BatchError> {
    match output {
        Some(dir) if !dir.is_dir() => fs::create_dir_all(dir)
            .map_err(|source| BatchError::Io { path: dir.to_path_buf(), source }),
        _ => Ok(()),
    }
}

/// Both paths name the same file on disk.
pub fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}
