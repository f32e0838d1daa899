//! compression/dictionary.rs
//! Process-wide, read-only compression dictionary.
//!
//! Both trained dictionaries (zstd dictionary magic) and raw-content
//! dictionaries are accepted; the engine decides how to interpret the bytes.

use std::fmt;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::MARKER_LEN;
use crate::types::BatchError;

/// Magic of a trained zstd dictionary (0xEC30A437, little-endian).
pub const ZSTD_DICT_MAGIC: [u8; MARKER_LEN] = [0x37, 0xA4, 0x30, 0xEC];

#[derive(Clone, PartialEq, Eq)]
pub struct Dictionary {
    bytes: Vec<u8>,
}

impl Dictionary {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    /// Read the dictionary file once; callers keep it for the whole run.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| BatchError::Dictionary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when the bytes carry the trained-dictionary header.
    pub fn is_trained(&self) -> bool {
        self.bytes.len() >= 2 * MARKER_LEN && self.bytes[..MARKER_LEN] == ZSTD_DICT_MAGIC
    }

    /// Dictionary ID from the trained header; raw-content dictionaries have none.
    pub fn id(&self) -> Option<u32> {
        if !self.is_trained() {
            return None;
        }
        match LittleEndian::read_u32(&self.bytes[MARKER_LEN..2 * MARKER_LEN]) {
            0 => None,
            id => Some(id),
        }
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.bytes.len())
            .field("id", &self.id())
            .finish()
    }
}
