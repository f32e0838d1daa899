//! constants.rs
//! Fixed wire markers, sizes and presets shared by every layer.
//!
//! Notes:
//! - Markers are `[u8; 4]` so the type itself enforces "exactly 4 bytes".
//! - Marker checks compare the full array, never a prefix or substring.

/// Length of every marker this tool knows about.
pub const MARKER_LEN: usize = 4;

/// Envelope marker: "this buffer is in custom-compressed form".
pub const ENVELOPE_MAGIC: [u8; MARKER_LEN] = [0x22, 0x4A, 0x00, 0xEF];

/// Native zstd frame magic (0xFD2FB528, little-endian on the wire).
pub const ZSTD_FRAME_MAGIC: [u8; MARKER_LEN] = [0x28, 0xB5, 0x2F, 0xFD];

/// Leading bytes of AES-encrypted assets that never went through our decompression path.
pub const AES_MAGIC: [u8; MARKER_LEN] = [0x22, 0x4A, 0x67, 0x00];

/// Width of the little-endian `original_size` field.
pub const ORIGINAL_SIZE_LEN: usize = 4;

/// Envelope marker + original size.
pub const ENVELOPE_PREFIX_LEN: usize = MARKER_LEN + ORIGINAL_SIZE_LEN;

/// Prefix plus at least the native frame magic.
pub const MIN_ENVELOPE_LEN: usize = ENVELOPE_PREFIX_LEN + MARKER_LEN;

/// Lowest compression level accepted on the command surface.
pub const MIN_LEVEL: i32 = 1;

/// Preset level used when compressing without an explicit level.
pub const PRESET_LEVEL: i32 = 19;

/// Dictionary location used when none is configured.
pub const DEFAULT_DICTIONARY_PATH: &str = "./bin/dict.zst";

/// Environment variable that overrides the dictionary location.
pub const DICTIONARY_ENV: &str = "AOVZSTD_DICT";

/// Number of result bytes shown in verbose previews.
pub const PREVIEW_LEN: usize = 128;

/// Bytes per preview row.
pub const PREVIEW_COLUMNS: usize = 16;
