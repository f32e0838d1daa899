//! compression/types.rs
//! Validated compression level.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{MIN_LEVEL, PRESET_LEVEL};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("compression level {level} out of range {min}..={max}")]
pub struct LevelError {
    pub level: i32,
    pub min: i32,
    pub max: i32,
}

/// Compression level within `[MIN_LEVEL, engine max]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompressionLevel(i32);

impl CompressionLevel {
    /// Level used when the caller asks for compression without a level.
    pub const PRESET: CompressionLevel = CompressionLevel(PRESET_LEVEL);

    pub fn new(level: i32) -> Result<Self, LevelError> {
        let range = Self::range();
        if !range.contains(&level) {
            return Err(LevelError { level, min: *range.start(), max: *range.end() });
        }
        Ok(Self(level))
    }

    /// Accepted levels, as reported by the engine.
    pub fn range() -> RangeInclusive<i32> {
        MIN_LEVEL..=zstd_safe::max_c_level()
    }

    /// Resolve an optional request: `None` yields the preset.
    pub fn resolve(requested: Option<i32>) -> Result<Self, LevelError> {
        requested.map_or(Ok(Self::PRESET), Self::new)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::PRESET
    }
}

impl TryFrom<i32> for CompressionLevel {
    type Error = LevelError;

    fn try_from(level: i32) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_is_within_engine_range() {
        assert!(CompressionLevel::range().contains(&CompressionLevel::PRESET.get()));
        assert_eq!(CompressionLevel::default().get(), 19);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(CompressionLevel::new(0).is_err());
        let max = *CompressionLevel::range().end();
        let err = CompressionLevel::new(max + 1).unwrap_err();
        assert_eq!(err.max, max);
        assert_eq!(CompressionLevel::new(max).unwrap().get(), max);
    }

    #[test]
    fn resolve_defaults_to_preset() {
        assert_eq!(CompressionLevel::resolve(None).unwrap(), CompressionLevel::PRESET);
        assert_eq!(CompressionLevel::resolve(Some(3)).unwrap().get(), 3);
    }
}
