//! classify.rs
//! Per-item admission decisions for batch runs.
//!
//! States:
//!
//! ```text
//! Unprocessed --compress--> Wrapped
//! Wrapped     --decompress--> Unprocessed
//! Foreign     (AES marker)   left untouched by compress
//! ```

use serde::Serialize;

use crate::config::Operation;
use crate::constants::{AES_MAGIC, MARKER_LEN};
use crate::envelope::has_marker;

/// Exact comparison of an item's first 4 bytes against the alternate marker.
#[inline]
pub fn is_already_transformed(head: &[u8; MARKER_LEN], aes_marker: &[u8; MARKER_LEN]) -> bool {
    head == aes_marker
}

/// Where an item sits relative to this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    /// Plain data, ready to compress.
    Unprocessed,
    /// Carries the envelope marker.
    Wrapped,
    /// Carries the AES marker; never went through our decompression path.
    Foreign,
}

/// Classify a buffer by its leading bytes.
pub fn classify(buf: &[u8]) -> ItemState {
    let head: Option<&[u8; MARKER_LEN]> = buf.get(..MARKER_LEN).and_then(|h| h.try_into().ok());
    match head {
        Some(h) if is_already_transformed(h, &AES_MAGIC) => ItemState::Foreign,
        Some(_) if has_marker(buf) => ItemState::Wrapped,
        _ => ItemState::Unprocessed,
    }
}

/// Why an item was not transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Compress requested on AES-marked data.
    AlreadyTransformed,
    /// Compress requested on data that already carries an envelope.
    AlreadyWrapped,
    /// Decompress requested on data without an envelope. Passed through.
    NotWrapped,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::AlreadyTransformed => "already transformed (AES marker)",
            SkipReason::AlreadyWrapped     => "already compressed",
            SkipReason::NotWrapped         => "not compressed, passed through",
        }
    }
}

/// What the driver should do with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Apply(Operation),
    Skip(SkipReason),
}

/// Gate an operation on the item's state.
pub fn plan(op: Operation, state: ItemState) -> Action {
    match (op, state) {
        (Operation::Compress, ItemState::Foreign) => Action::Skip(SkipReason::AlreadyTransformed),
        // Not an engine gate: a re-run over the same directory must not wrap twice.
        (Operation::Compress, ItemState::Wrapped) => Action::Skip(SkipReason::AlreadyWrapped),
        (Operation::Compress, ItemState::Unprocessed) => Action::Apply(op),
        (Operation::Decompress, ItemState::Wrapped) => Action::Apply(op),
        (Operation::Decompress, _) => Action::Skip(SkipReason::NotWrapped),
    }
}
