//! Immutable art configuration.
//!
//! An [`ArtConfig`] fully determines a texture: two configurations that
//! compare equal produce identical colors at every coordinate. Validation
//! happens once, at construction or deserialization; sampling never fails.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::noise::{Fbm, Noise2D};
use crate::palette::Palette;

/// Default spatial frequency of the first octave.
pub const DEFAULT_SCALE: f64 = 0.01;
/// Default number of octaves.
pub const DEFAULT_OCTAVES: u8 = 3;
/// Default amplitude decay per octave.
pub const DEFAULT_PERSISTENCE: f64 = 0.5;

/// Domain tag prepended to the fingerprint encoding.
const FINGERPRINT_TAG: &[u8] = b"eventart.config.v1";

/// Parameters of a seeded event-art texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArtConfig")]
pub struct ArtConfig {
    palette: Palette,
    seed: u32,
    scale: f64,
    octaves: u8,
    persistence: f64,
}

/// Unvalidated wire shape of [`ArtConfig`], the JSON configuration format.
///
/// Deserializing straight into [`ArtConfig`] folds validation failures into
/// the serde error; deserialize into this type and call
/// [`validate`](RawArtConfig::validate) to keep the typed [`ConfigError`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawArtConfig {
    pub palette: Vec<Color>,
    pub seed: u32,
    pub scale: f64,
    pub octaves: u8,
    pub persistence: f64,
}

impl RawArtConfig {
    /// Check every invariant and build the configuration.
    pub fn validate(self) -> Result<ArtConfig, ConfigError> {
        ArtConfig::new(self.palette, self.seed, self.scale, self.octaves, self.persistence)
    }
}

impl TryFrom<RawArtConfig> for ArtConfig {
    type Error = ConfigError;

    fn try_from(raw: RawArtConfig) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

impl ArtConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    /// * [`ConfigError::EmptyPalette`] if `palette` is empty
    /// * [`ConfigError::InvalidScale`] if `scale` is not finite and > 0
    /// * [`ConfigError::InvalidOctaves`] if `octaves` is 0
    /// * [`ConfigError::InvalidPersistence`] if `persistence` is outside (0, 1)
    ///
    /// # Example
    /// ```
    /// use eventart::{ArtConfig, Color};
    ///
    /// let red = Color::from_hex(0xFF0000);
    /// let blue = Color::from_hex(0x0000FF);
    /// assert!(ArtConfig::new(vec![red, blue], 42, 0.01, 3, 0.5).is_ok());
    /// assert!(ArtConfig::new(vec![], 42, 0.01, 3, 0.5).is_err());
    /// ```
    pub fn new(
        palette: Vec<Color>,
        seed: u32,
        scale: f64,
        octaves: u8,
        persistence: f64,
    ) -> Result<Self, ConfigError> {
        let palette = Palette::new(palette)?;
        validate_scale(scale)?;
        validate_octaves(octaves)?;
        validate_persistence(persistence)?;
        Ok(Self {
            palette,
            seed,
            scale,
            octaves,
            persistence,
        })
    }

    /// Start a builder with the default scale, octaves and persistence.
    pub fn builder(palette: Vec<Color>) -> ArtConfigBuilder {
        ArtConfigBuilder::new(palette)
    }

    /// Construct from parameters known to be valid.
    pub(crate) fn from_valid_parts(
        palette: Vec<Color>,
        seed: u32,
        scale: f64,
        octaves: u8,
        persistence: f64,
    ) -> Self {
        debug_assert!(!palette.is_empty());
        debug_assert!(validate_scale(scale).is_ok());
        debug_assert!(validate_octaves(octaves).is_ok());
        debug_assert!(validate_persistence(persistence).is_ok());
        Self {
            palette: Palette::from_valid(palette),
            seed,
            scale,
            octaves,
            persistence,
        }
    }

    /// The same configuration with a different seed.
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn octaves(&self) -> u8 {
        self.octaves
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// The fractal scalar field of this configuration.
    pub fn fbm(&self) -> Fbm {
        Fbm::from_config(self)
    }

    /// Normalized noise in [0, 1] at `(x, y)`.
    #[inline]
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        self.fbm().sample(x, y)
    }

    /// Color at `(x, y)`.
    #[inline]
    pub fn color_at(&self, x: f64, y: f64) -> Color {
        self.palette.color_at(self.noise(x, y))
    }

    /// Stable BLAKE3 fingerprint of every field, as a 64-character hex string.
    ///
    /// Equal configurations have equal fingerprints, so the value can key
    /// caches of rendered output.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(FINGERPRINT_TAG);
        hasher.update(&(self.palette.len() as u32).to_le_bytes());
        for color in self.palette.stops() {
            hasher.update(&color.to_rgba8());
        }
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&self.scale.to_bits().to_le_bytes());
        hasher.update(&[self.octaves]);
        hasher.update(&self.persistence.to_bits().to_le_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

/// Builder for [`ArtConfig`].
#[derive(Debug, Clone)]
pub struct ArtConfigBuilder {
    palette: Vec<Color>,
    seed: u32,
    scale: f64,
    octaves: u8,
    persistence: f64,
}

impl ArtConfigBuilder {
    fn new(palette: Vec<Color>) -> Self {
        Self {
            palette,
            seed: 0,
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
        }
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn octaves(mut self, octaves: u8) -> Self {
        self.octaves = octaves;
        self
    }

    pub fn persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Validate and build. Invalid values are rejected, never clamped.
    pub fn build(self) -> Result<ArtConfig, ConfigError> {
        ArtConfig::new(
            self.palette,
            self.seed,
            self.scale,
            self.octaves,
            self.persistence,
        )
    }
}

fn validate_scale(scale: f64) -> Result<(), ConfigError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScale(scale))
    }
}

fn validate_octaves(octaves: u8) -> Result<(), ConfigError> {
    if octaves >= 1 {
        Ok(())
    } else {
        Err(ConfigError::InvalidOctaves(octaves))
    }
}

fn validate_persistence(persistence: f64) -> Result<(), ConfigError> {
    if persistence > 0.0 && persistence < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPersistence(persistence))
    }
}
