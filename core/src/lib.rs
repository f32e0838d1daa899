//! aovzstd-core
//!
//! Dictionary-bound zstd compression for game asset files.
//! Envelope codec, frame locator, transform engine and a sequential batch
//! driver. No CLI, no console output.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod buffer;
pub mod config;

// Wire format
pub mod envelope;
pub mod framing;

// Engine
pub mod compression;
pub mod transform;

// Batch layer
pub mod classify;
pub mod io;
pub mod telemetry;
pub mod batch;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::batch::{run_batch, BatchReport, ItemOutcome, ItemReport};
    pub use crate::buffer::ByteBuffer;
    pub use crate::classify::{classify, plan, Action, ItemState, SkipReason};
    pub use crate::compression::{CompressionLevel, Dictionary};
    pub use crate::config::{BatchConfig, Operation, Target};
    pub use crate::transform::{compress, decompress};
    pub use crate::types::{BatchError, TransformError};
}
