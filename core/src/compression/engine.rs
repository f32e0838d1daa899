//! compression/engine.rs
//!
//! Scoped calls into the zstd engine.
//!
//! Design notes:
//! - The dictionary handle is created before the context that references it,
//!   so drop order releases the context first.
//! - Compression is a single end-of-stream call into a buffer sized to the
//!   engine bound. The frame header carries the content size. Any engine
//!   error is final; there is no resume.
//! - Decompression allocates exactly the size the frame declares and runs a
//!   single streaming call. Bytes after the end of the first frame are ignored.

use zstd_safe::{CCtx, CDict, DCtx, DDict, InBuffer, OutBuffer, ResetDirective};

use crate::buffer::try_alloc;
use crate::compression::dictionary::Dictionary;
use crate::compression::types::CompressionLevel;
use crate::types::TransformError;

fn engine_msg(code: zstd_safe::ErrorCode) -> String {
    zstd_safe::get_error_name(code).to_string()
}

/// Worst-case compressed size for `src_len` input bytes.
#[inline]
pub fn compress_bound(src_len: usize) -> usize {
    zstd_safe::compress_bound(src_len)
}

/// Decompressed size declared by a native frame header.
///
/// # Errors
/// - `TransformError::UnknownContentSize` when the header is unreadable or
///   carries no size.
pub fn frame_content_size(frame: &[u8]) -> Result<u64, TransformError> {
    match zstd_safe::get_frame_content_size(frame) {
        Ok(Some(size)) => Ok(size),
        Ok(None) | Err(_) => Err(TransformError::UnknownContentSize),
    }
}

/// Compress `input` into a single native frame bound to `dict`.
pub fn compress_frame(
    input: &[u8],
    dict: &Dictionary,
    level: CompressionLevel,
) -> Result<Vec<u8>, TransformError> {
    let cdict = CDict::try_create(dict.as_bytes(), level.get()).ok_or_else(|| {
        TransformError::Compression("cannot create compression dictionary".into())
    })?;
    let mut cctx = CCtx::try_create()
        .ok_or_else(|| TransformError::Compression("cannot create compression context".into()))?;

    cctx.reset(ResetDirective::SessionOnly)
        .map_err(|c| TransformError::Compression(engine_msg(c)))?;
    cctx.ref_cdict(&cdict)
        .map_err(|c| TransformError::Compression(engine_msg(c)))?;

    let mut out = try_alloc(compress_bound(input.len()))?;

    // One end-of-stream pass over the whole input; the frame records its size.
    cctx.compress2(&mut out, input)
        .map_err(|c| TransformError::Compression(engine_msg(c)))?;

    Ok(out)
}

/// Decompress the first native frame in `frame` using `dict`.
pub fn decompress_frame(frame: &[u8], dict: &Dictionary) -> Result<Vec<u8>, TransformError> {
    let ddict = DDict::try_create(dict.as_bytes()).ok_or_else(|| {
        TransformError::Decompression("cannot create decompression dictionary".into())
    })?;
    let mut dctx = DCtx::try_create().ok_or_else(|| {
        TransformError::Decompression("cannot create decompression context".into())
    })?;

    dctx.ref_ddict(&ddict)
        .map_err(|c| TransformError::Decompression(engine_msg(c)))?;

    let declared = frame_content_size(frame)?;
    let declared = usize::try_from(declared)
        .map_err(|_| TransformError::Allocation { requested: usize::MAX })?;

    let mut out = try_alloc(declared)?;
    let mut in_buf = InBuffer::around(frame);

    {
        let mut out_buf = OutBuffer::around(&mut out);
        dctx.decompress_stream(&mut out_buf, &mut in_buf)
            .map_err(|c| TransformError::Decompression(engine_msg(c)))?;
    }

    // A truncated frame decodes short; never hand back a partly filled buffer.
    if out.len() != declared {
        return Err(TransformError::Decompression(format!(
            "frame produced {} of {} declared bytes",
            out.len(),
            declared
        )));
    }

    Ok(out)
}
