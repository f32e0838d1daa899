//! batch/mod.rs
//! Sequential batch driver over a file or a flat directory.
//!
//! Per item: read, classify, plan, transform, write. A failing item is
//! reported and the run moves on; only a missing target aborts the run.

pub mod report;
pub mod paths;
pub mod driver;

pub use report::*;
pub use paths::*;
pub use driver::*;
