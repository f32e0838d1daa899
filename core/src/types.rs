//! types.rs
//! Error taxonomy shared by the transform path and the batch driver.
//!
//! - `TransformError` covers a single buffer transform. No variant ever
//!   carries a partially written buffer.
//! - `BatchError` covers preconditions of a whole run (target, dictionary).
//!   Per-item failures are recorded in the batch report, not raised.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::envelope::EnvelopeError;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Output buffer could not be reserved.
    #[error("allocation of {requested} bytes failed")]
    Allocation { requested: usize },

    /// Engine failed while setting up or streaming a compression.
    #[error("compression failed: {0}")]
    Compression(String),

    /// Engine failed while streaming a decompression.
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// Wrapped buffer is truncated or carries no native frame.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[from] EnvelopeError),

    /// The native frame header does not declare its decompressed size.
    #[error("decompressed size unknown: native frame header declares no content size")]
    UnknownContentSize,
}

impl TransformError {
    /// Short, stable label for reports and counters.
    pub fn kind(&self) -> &'static str {
        match self {
            TransformError::Allocation { .. } => "allocation",
            TransformError::Compression(_) => "compression",
            TransformError::Decompression(_) => "decompression",
            TransformError::MalformedEnvelope(_) => "malformed-envelope",
            TransformError::UnknownContentSize => "unknown-content-size",
        }
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    /// Target file or directory does not exist.
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem operation failed on a run-level path.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dictionary could not be loaded.
    #[error("cannot load dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
