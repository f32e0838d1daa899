//! envelope/decode.rs
//! Envelope detection and payload extraction.
//!
//! Design notes:
//! - `has_marker` only looks at the first 4 bytes; it is the self-classifier
//!   used by decompression.
//! - The payload starts at the leftmost native frame magic and runs to the end
//!   of the buffer. Trailing bytes after the real end of the frame are kept and
//!   left for the engine to ignore.

use byteorder::{ByteOrder, LittleEndian};

use crate::buffer::{try_alloc, ByteBuffer};
use crate::constants::{ENVELOPE_MAGIC, MARKER_LEN, MIN_ENVELOPE_LEN};
use crate::envelope::types::{EnvelopeError, EnvelopeHeader, EnvelopeView};
use crate::framing::find_native_frame;
use crate::types::TransformError;

/// True when the buffer starts with the envelope marker.
#[inline]
pub fn has_marker(buf: &[u8]) -> bool {
    buf.get(..MARKER_LEN) == Some(&ENVELOPE_MAGIC[..])
}

/// Decode the 8-byte prefix.
pub fn decode_header(buf: &[u8]) -> Result<EnvelopeHeader, EnvelopeError> {
    if buf.len() < EnvelopeHeader::LEN {
        return Err(EnvelopeError::TooShort { have: buf.len(), need: EnvelopeHeader::LEN });
    }
    if !has_marker(buf) {
        let mut have = [0u8; MARKER_LEN];
        have.copy_from_slice(&buf[..MARKER_LEN]);
        return Err(EnvelopeError::MissingMarker { have });
    }

    let original_size = LittleEndian::read_u32(&buf[MARKER_LEN..EnvelopeHeader::LEN]);
    Ok(EnvelopeHeader { original_size })
}

/// Convenience accessor for the embedded size.
pub fn read_original_size(buf: &[u8]) -> Result<u32, EnvelopeError> {
    decode_header(buf).map(|h| h.original_size)
}

/// Borrow the native payload without copying.
///
/// Only length and native magic are checked here; callers gate on
/// `has_marker` first.
pub fn payload_slice(buf: &[u8]) -> Result<&[u8], EnvelopeError> {
    if buf.len() < MIN_ENVELOPE_LEN {
        return Err(EnvelopeError::TooShort { have: buf.len(), need: MIN_ENVELOPE_LEN });
    }

    let start = find_native_frame(buf).ok_or(EnvelopeError::NativeFrameNotFound)?;
    Ok(&buf[start..])
}

/// Parse a full envelope into a borrowed view.
pub fn decode_envelope(buf: &[u8]) -> Result<EnvelopeView<'_>, EnvelopeError> {
    let header = decode_header(buf)?;
    let payload = payload_slice(buf)?;
    Ok(EnvelopeView { header, payload })
}

/// Copy the native payload into a new buffer.
///
/// # Errors
/// - `TransformError::MalformedEnvelope` when the buffer is shorter than 12
///   bytes or holds no native frame magic.
/// - `TransformError::Allocation` if the copy cannot be reserved.
pub fn extract_payload(buf: &[u8]) -> Result<ByteBuffer, TransformError> {
    let payload = payload_slice(buf)?;

    let mut out = try_alloc(payload.len())?;
    out.extend_from_slice(payload);
    Ok(ByteBuffer::new(out))
}
