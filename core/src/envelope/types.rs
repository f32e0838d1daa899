//! envelope/types.rs
//! Decoded envelope prefix and its error type.

use std::fmt;

use thiserror::Error;

use crate::constants::{ENVELOPE_MAGIC, ENVELOPE_PREFIX_LEN, MARKER_LEN};
use crate::utils::fmt_bytes;

/// The fixed 8-byte prefix of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeHeader {
    /// Size of the data before compression.
    pub original_size: u32,
}

impl EnvelopeHeader {
    pub const LEN: usize = ENVELOPE_PREFIX_LEN;

    pub fn new(original_size: u32) -> Self {
        Self { original_size }
    }
}

impl fmt::Display for EnvelopeHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "envelope {} original_size={}", fmt_bytes(&ENVELOPE_MAGIC), self.original_size)
    }
}

/// Borrowed view of a parsed envelope. No allocation, no copy.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeView<'a> {
    pub header: EnvelopeHeader,
    /// Native frame bytes, from the native magic to the end of the buffer.
    pub payload: &'a [u8],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Buffer cannot hold the prefix plus a native magic.
    #[error("envelope too short: {have} < {need} bytes")]
    TooShort { have: usize, need: usize },

    /// Leading bytes are not the envelope marker.
    #[error("missing envelope marker: got {}", fmt_bytes(.have))]
    MissingMarker { have: [u8; MARKER_LEN] },

    /// No native frame magic anywhere in the buffer.
    #[error("native frame marker not found")]
    NativeFrameNotFound,
}
