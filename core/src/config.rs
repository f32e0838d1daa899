//! config.rs
//! Run configuration as seen by the core. The CLI builds these; nothing in
//! here parses arguments or reads the environment.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::compression::CompressionLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Compress,
    Decompress,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Compress   => "compress",
            Operation::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

/// What a batch run walks over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single file.
    File(PathBuf),
    /// Every regular file directly inside a directory. No recursion.
    Dir(PathBuf),
}

impl Target {
    pub fn path(&self) -> &Path {
        match self {
            Target::File(p) | Target::Dir(p) => p,
        }
    }
}

/// Settings shared by every item of a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub operation: Operation,
    /// Only used when compressing.
    pub level: CompressionLevel,
    /// Destination file or directory. `None` rewrites items in place.
    pub output: Option<PathBuf>,
}

impl BatchConfig {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            level: CompressionLevel::default(),
            output: None,
        }
    }

    pub fn with_level(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}
