//! telemetry/snapshot.rs
//!
//! Immutable end-of-run telemetry.
//!
//! Design notes:
//! - `size_ratio` is `bytes_out / bytes_in` over transformed items only. It is
//!   below 1.0 after compression and above 1.0 after decompression.
//! - Elapsed time is reported both as a `Duration` and in milliseconds for
//!   JSON consumers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub items_seen: u64,
    pub items_transformed: u64,
    pub items_skipped: u64,
    pub items_failed: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub size_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub elapsed_ms: f64,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let size_ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            items_seen: counters.items_seen,
            items_transformed: counters.items_transformed,
            items_skipped: counters.items_skipped,
            items_failed: counters.items_failed,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            size_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            elapsed_ms: elapsed.as_secs_f64() * 1_000.0,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Item counts add up and stage time never exceeds wall time.
    pub fn sanity_check(&self) -> bool {
        self.items_seen == self.items_transformed + self.items_skipped + self.items_failed
            && self.total_stage_time() <= self.elapsed
    }
}
