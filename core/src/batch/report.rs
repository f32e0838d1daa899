//! batch/report.rs
//! Per-item and per-run results.

use std::path::PathBuf;

use serde::Serialize;

use crate::classify::{ItemState, SkipReason};
use crate::config::Operation;
use crate::telemetry::{Stage, TelemetrySnapshot};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemOutcome {
    Transformed,
    Skipped { reason: SkipReason },
    /// Nothing was written for this item. `kind` is a stable label such as
    /// `io` or `malformed-envelope`.
    Failed { stage: Stage, kind: &'static str, message: String },
}

impl ItemOutcome {
    pub fn is_io_failure(&self) -> bool {
        matches!(self, ItemOutcome::Failed { stage: Stage::Read | Stage::Write, .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub operation: Operation,
    /// `None` when the item could not be read.
    pub state: Option<ItemState>,
    pub outcome: ItemOutcome,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// `original_size` recorded in the envelope, for decompressed items.
    pub declared_size: Option<u32>,
}

impl ItemReport {
    pub(crate) fn new(source: PathBuf, destination: PathBuf, operation: Operation) -> Self {
        Self {
            source,
            destination,
            operation,
            state: None,
            outcome: ItemOutcome::Transformed,
            bytes_in: 0,
            bytes_out: 0,
            declared_size: None,
        }
    }

    /// Decompressed length disagrees with the envelope's `original_size`.
    pub fn size_mismatch(&self) -> bool {
        match (self.declared_size, &self.outcome) {
            (Some(declared), ItemOutcome::Transformed) => declared as usize != self.bytes_out,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub items: Vec<ItemReport>,
    pub telemetry: TelemetrySnapshot,
}

impl BatchReport {
    pub fn transformed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Transformed))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Failed { .. }))
    }

    /// Any item hit a read or write error.
    pub fn has_io_errors(&self) -> bool {
        self.items.iter().any(|i| i.outcome.is_io_failure())
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| pred(&i.outcome)).count()
    }
}
