//! envelope/mod.rs
//! Custom container wrapped around a native zstd frame.
//!
//! Layout (little-endian):
//!
//! ```text
//! [ envelope magic (4) ]  22 4A 00 EF
//! [ original_size  (4) ]  u32, size before compression
//! [ native frame   (N) ]  starts with 28 B5 2F FD
//! ```
//!
//! Notes:
//! - The 8-byte prefix always precedes the payload.
//! - Decoding locates the payload by scanning for the native magic, not by
//!   assuming offset 8.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
