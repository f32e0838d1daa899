//! framing/locate.rs
//!
//! Bounded linear scan for the native frame magic.
//!
//! Design notes:
//! - Exact 4-byte comparison at every offset; the leftmost hit wins.
//! - Offsets are bounded by `len - 4`, so the scan never reads past the end.
//! - Buffers shorter than the magic simply have no match.

use crate::constants::{MARKER_LEN, ZSTD_FRAME_MAGIC};

/// Index of the first native frame magic in `buf`, if any.
#[inline]
pub fn find_native_frame(buf: &[u8]) -> Option<usize> {
    find_marker(buf, &ZSTD_FRAME_MAGIC)
}

/// Index of the first occurrence of `marker` in `buf`, if any.
#[inline]
pub fn find_marker(buf: &[u8], marker: &[u8; MARKER_LEN]) -> Option<usize> {
    buf.windows(MARKER_LEN).position(|w| w == marker)
}
