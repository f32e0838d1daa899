//! buffer.rs
//! Owned byte buffer passed between every layer.
//!
//! Ownership moves into each transform, which either returns a fresh buffer
//! or hands the same allocation back untouched (pass-through). Nothing keeps
//! a second handle, so a buffer can never be read after it was consumed.

use std::fmt;
use std::ops::Deref;

use crate::constants::MARKER_LEN;
use crate::types::TransformError;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// First 4 bytes, or `None` when the buffer is too short to carry a marker.
    pub fn head(&self) -> Option<&[u8; MARKER_LEN]> {
        self.data.get(..MARKER_LEN).and_then(|h| h.try_into().ok())
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// Reserve exactly `capacity` bytes, reporting failure instead of aborting.
pub(crate) fn try_alloc(capacity: usize) -> Result<Vec<u8>, TransformError> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|_| TransformError::Allocation { requested: capacity })?;
    Ok(v)
}

// Large payloads make `{:?}` unreadable; show size and the leading bytes only.
impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.data.len().min(16);
        write!(f, "ByteBuffer({} bytes, head=0x{}", self.data.len(), hex::encode(&self.data[..shown]))?;
        if shown < self.data.len() {
            f.write_str("..")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_requires_four_bytes() {
        assert!(ByteBuffer::from(vec![1, 2, 3]).head().is_none());
        assert_eq!(ByteBuffer::from(vec![1, 2, 3, 4, 5]).head(), Some(&[1, 2, 3, 4]));
    }

    #[test]
    fn debug_truncates_long_buffers() {
        let b = ByteBuffer::from(vec![0xAB; 40]);
        let s = format!("{:?}", b);
        assert!(s.starts_with("ByteBuffer(40 bytes, head=0xabab"));
        assert!(s.ends_with("..)"));
    }
}
