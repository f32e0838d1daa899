//! transform.rs
//! Dictionary-bound compress/decompress over whole buffers.
//!
//! Both operations take ownership of their input. On success the caller gets a
//! new buffer (or, for a decompress pass-through, its own buffer back). On
//! failure the input is dropped and nothing partial is returned.

use crate::buffer::ByteBuffer;
use crate::compression::{compress_frame, decompress_frame, CompressionLevel, Dictionary};
use crate::envelope::{has_marker, payload_slice, wrap};
use crate::types::TransformError;

/// Compress `input` and wrap the native frame in an envelope.
///
/// # Errors
/// - `TransformError::Compression` on any engine failure, or when the input
///   is too large for the 32-bit `original_size` field.
/// - `TransformError::Allocation` if an output buffer cannot be reserved.
pub fn compress(
    input: ByteBuffer,
    dict: &Dictionary,
    level: CompressionLevel,
) -> Result<ByteBuffer, TransformError> {
    let original_size = u32::try_from(input.len()).map_err(|_| {
        TransformError::Compression(format!(
            "input of {} bytes exceeds the envelope size field",
            input.len()
        ))
    })?;

    let frame = compress_frame(&input, dict, level)?;
    drop(input);

    wrap(ByteBuffer::new(frame), original_size)
}

/// Unwrap and decompress an envelope.
///
/// Buffers without the envelope marker are returned unchanged.
///
/// # Errors
/// - `TransformError::MalformedEnvelope` for truncated envelopes or a missing
///   native frame.
/// - `TransformError::UnknownContentSize` when the frame does not declare its size.
/// - `TransformError::Decompression` on any engine failure.
pub fn decompress(input: ByteBuffer, dict: &Dictionary) -> Result<ByteBuffer, TransformError> {
    if !has_marker(&input) {
        return Ok(input);
    }

    let frame = payload_slice(&input)?;
    let out = decompress_frame(frame, dict)?;

    Ok(ByteBuffer::new(out))
}
