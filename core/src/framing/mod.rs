//! framing/mod.rs
//! Native zstd frame discovery inside an arbitrary byte buffer.

pub mod locate;

pub use locate::*;
