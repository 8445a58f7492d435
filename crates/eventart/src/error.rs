//! Error types for configuration, presets, rendering and seed storage.

use thiserror::Error;

/// Error raised when an [`ArtConfig`](crate::ArtConfig) violates an invariant.
///
/// Only ever produced at construction (or deserialization) time; a valid
/// configuration never fails while sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The palette has no colors.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// Scale is zero, negative or not finite.
    #[error("scale must be a finite number > 0, got {0}")]
    InvalidScale(f64),

    /// Zero octaves.
    #[error("octaves must be >= 1, got {0}")]
    InvalidOctaves(u8),

    /// Persistence outside the open interval (0, 1).
    #[error("persistence must be in (0, 1), got {0}")]
    InvalidPersistence(f64),
}

impl ConfigError {
    /// Returns the stable error code string (e.g., "C001").
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::EmptyPalette => "C001",
            ConfigError::InvalidScale(_) => "C002",
            ConfigError::InvalidOctaves(_) => "C003",
            ConfigError::InvalidPersistence(_) => "C004",
        }
    }

    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::EmptyPalette => "palette",
            ConfigError::InvalidScale(_) => "scale",
            ConfigError::InvalidOctaves(_) => "octaves",
            ConfigError::InvalidPersistence(_) => "persistence",
        }
    }
}

/// Error for malformed hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{input}': expected #RRGGBB or #RRGGBBAA")]
pub struct ColorParseError {
    /// The rejected input.
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

/// Error for preset lookups by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("unknown preset '{0}'")]
    Unknown(String),
}

/// Error for render requests with unusable dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("dimensions must be at least 1x1, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("dimensions are too large: max is {max}x{max}, got {width}x{height}")]
    TooLarge { width: u32, height: u32, max: u32 },
}

/// Error reported by a [`SeedStore`](crate::refresh::SeedStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("seed store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed store record is malformed: {0}")]
    Decode(#[from] serde_json::Error),
}
