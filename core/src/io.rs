//! io.rs
//! Whole-file reads and writes for the batch driver.

use std::fs;
use std::path::Path;

use crate::buffer::ByteBuffer;
use crate::types::BatchError;

/// Read an entire file into a buffer.
pub fn read_file(path: &Path) -> Result<ByteBuffer, BatchError> {
    fs::read(path)
        .map(ByteBuffer::new)
        .map_err(|source| BatchError::Io { path: path.to_path_buf(), source })
}

/// Create or truncate `path` and write the whole buffer.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), BatchError> {
    fs::write(path, data).map_err(|source| BatchError::Io { path: path.to_path_buf(), source })
}
