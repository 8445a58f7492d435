//! EventArt: deterministic seeded event art.
//!
//! Maps an integer seed and a small palette to an infinite, reproducible 2D
//! color texture, so every event can carry a unique gradient without storing
//! or fetching an image.
//!
//! # Pipeline
//!
//! - **Hash kernel** ([`hash`]): lattice point + seed to a scalar in [0, 1)
//! - **Value noise** ([`noise::field_value`]): quintic-smoothed bilinear blend of lattice values
//! - **Octave compositor** ([`noise::noise`]): normalized multi-octave sum
//! - **Palette mapper** ([`palette`]): scalar to interpolated color
//! - **Configuration** ([`ArtConfig`]) and **presets** ([`presets`])
//!
//! Consumers live alongside: [`render`] paints buffers, [`refresh`] decides
//! when a stored seed is replaced.
//!
//! # Example
//!
//! ```
//! use eventart::{presets, sample, ArtConfig, Color};
//!
//! let config = ArtConfig::new(
//!     vec![Color::from_hex(0xFF0000), Color::from_hex(0x0000FF)],
//!     42,
//!     0.01,
//!     3,
//!     0.5,
//! )
//! .unwrap();
//!
//! assert_eq!(sample(0.0, 0.0, &config), sample(0.0, 0.0, &config));
//!
//! let thumb = eventart::render::render_strided(&presets::aurora(7), 64, 64, [0.0, 0.0], 4).unwrap();
//! assert_eq!(thumb.data.len(), 64 * 64);
//! ```
//!
//! # Determinism
//!
//! - Same configuration + same coordinate = bit-identical color
//! - No RNG object, global state or platform source in the sampling path
//! - All functions are pure and safe to call from any number of threads

pub mod color;
pub mod config;
pub mod error;
pub mod hash;
pub mod noise;
pub mod palette;
pub mod presets;
pub mod refresh;
pub mod render;

// Re-export main types for convenience
pub use color::Color;
pub use config::{ArtConfig, ArtConfigBuilder, RawArtConfig};
pub use error::{ColorParseError, ConfigError, PresetError, RenderError, StoreError};
pub use noise::{field_value, noise, Fbm, Noise2D, ValueNoise};
pub use palette::{color_at, Palette};
pub use presets::{Preset, PRESET_COUNT};
pub use refresh::{RefreshPolicy, Resolution, SeedRecord, SeedStore};
pub use render::ArtBuffer;

/// Color of the texture described by `config` at `(x, y)`.
///
/// Total for every `x, y`; non-finite coordinates sample the origin.
#[inline]
pub fn sample(x: f64, y: f64, config: &ArtConfig) -> Color {
    config.color_at(x, y)
}
