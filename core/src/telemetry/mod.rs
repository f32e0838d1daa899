//! telemetry/mod.rs
//! Batch telemetry: counters, stage timers, and immutable snapshots.
//!
//! Industry notes:
//! - Size ratio (`bytes_out / bytes_in`) is the usual headline number for
//!   asset compression tooling.
//! - Per-stage timers show whether a run is bound by disk or by the engine.
//! - Snapshots are plain data and serialize straight to JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
