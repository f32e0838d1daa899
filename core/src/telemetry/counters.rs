//! telemetry/counters.rs
//! Mutable counters updated by the batch driver.
//!
//! Summary: one call per finished item. Converted into an immutable
//! `TelemetrySnapshot` at the end of the run.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub items_seen: u64,
    pub items_transformed: u64,
    pub items_skipped: u64,
    pub items_failed: u64,
    /// Bytes read from transformed items.
    pub bytes_in: u64,
    /// Bytes produced for transformed items.
    pub bytes_out: u64,
}

impl TelemetryCounters {
    /// Record one successfully transformed item.
    pub fn add_transformed(&mut self, in_len: usize, out_len: usize) {
        self.items_seen += 1;
        self.items_transformed += 1;
        self.bytes_in += in_len as u64;
        self.bytes_out += out_len as u64;
    }

    /// Record an item that was left as is.
    pub fn add_skipped(&mut self) {
        self.items_seen += 1;
        self.items_skipped += 1;
    }

    /// Record an item whose read, transform or write failed.
    pub fn add_failed(&mut self) {
        self.items_seen += 1;
        self.items_failed += 1;
    }

    pub fn merge(&mut self, other: &Self) {
        *self += other.clone();
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.items_seen += rhs.items_seen;
        self.items_transformed += rhs.items_transformed;
        self.items_skipped += rhs.items_skipped;
        self.items_failed += rhs.items_failed;
        self.bytes_in += rhs.bytes_in;
        self.bytes_out += rhs.bytes_out;
    }
}
