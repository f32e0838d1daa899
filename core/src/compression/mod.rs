//! compression/mod.rs
//! Thin, scoped bridge to the zstd engine.
//!
//! Notes:
//! - Levels are validated once, at the edge, into `CompressionLevel`.
//! - The dictionary is loaded once per process and only ever borrowed.
//! - Engine contexts and dictionary handles live for a single call and are
//!   released by `Drop` on every exit path.

pub mod types;
pub mod dictionary;
pub mod engine;

pub use types::*;
pub use dictionary::*;
pub use engine::*;
