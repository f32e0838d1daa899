//! envelope/encode.rs
//! Envelope construction.

use byteorder::{ByteOrder, LittleEndian};

use crate::buffer::{try_alloc, ByteBuffer};
use crate::constants::{ENVELOPE_MAGIC, ORIGINAL_SIZE_LEN};
use crate::envelope::types::EnvelopeHeader;
use crate::types::TransformError;

/// Serialize the 8-byte envelope prefix.
#[inline]
pub fn encode_header(h: &EnvelopeHeader) -> [u8; EnvelopeHeader::LEN] {
    let mut out = [0u8; EnvelopeHeader::LEN];
    out[..ENVELOPE_MAGIC.len()].copy_from_slice(&ENVELOPE_MAGIC);        // 0..4 marker
    LittleEndian::write_u32(&mut out[ENVELOPE_MAGIC.len()..], h.original_size); // 4..8 original size
    debug_assert_eq!(ENVELOPE_MAGIC.len() + ORIGINAL_SIZE_LEN, EnvelopeHeader::LEN);
    out
}

/// Wrap a native compressed frame into an envelope.
///
/// Consumes `compressed`; the returned buffer is exactly
/// `compressed.len() + 8` bytes.
///
/// # Errors
/// - `TransformError::Allocation` if the output buffer cannot be reserved.
pub fn wrap(compressed: ByteBuffer, original_size: u32) -> Result<ByteBuffer, TransformError> {
    let mut out = try_alloc(EnvelopeHeader::LEN + compressed.len())?;

    out.extend_from_slice(&encode_header(&EnvelopeHeader::new(original_size)));
    out.extend_from_slice(&compressed);

    Ok(ByteBuffer::new(out))
}
