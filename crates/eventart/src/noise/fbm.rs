//! Multi-octave (fractal) value noise.
//!
//! Octave `i` samples the value field at `scale * 2^i` with amplitude
//! `persistence^i` and its own seed. The sum is divided by the total
//! amplitude, so the output stays in [0, 1] with the same overall brightness
//! for any octave count.

use super::{field_value, Noise2D};
use crate::config::ArtConfig;
use crate::hash::octave_seed;

/// Frequency multiplier between consecutive octaves.
const LACUNARITY: f64 = 2.0;

/// Fractal Brownian Motion over value noise.
///
/// Only obtainable from a validated [`ArtConfig`], so `octaves >= 1` and
/// `0 < persistence < 1` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fbm {
    seed: u32,
    /// Frequency of the first octave.
    scale: f64,
    octaves: u8,
    persistence: f64,
}

impl Fbm {
    /// Build the fractal field described by a configuration.
    pub fn from_config(config: &ArtConfig) -> Self {
        Self {
            seed: config.seed(),
            scale: config.scale(),
            octaves: config.octaves(),
            persistence: config.persistence(),
        }
    }

    /// Number of octaves summed.
    pub fn octaves(&self) -> u8 {
        self.octaves
    }

    /// Sum of the amplitudes used, `Σ persistence^i`.
    pub fn amplitude_sum(&self) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        for _ in 0..self.octaves {
            sum += amplitude;
            amplitude *= self.persistence;
        }
        sum
    }
}

impl Noise2D for Fbm {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.scale;

        for octave in 0..self.octaves {
            let seed = octave_seed(self.seed, octave);
            total += amplitude * field_value(x * frequency, y * frequency, seed);
            amplitude *= self.persistence;
            frequency *= LACUNARITY;
        }

        (total / self.amplitude_sum()).clamp(0.0, 1.0)
    }
}

/// Sample the normalized multi-octave noise of a configuration at `(x, y)`.
///
/// # Example
/// ```
/// use eventart::{noise::noise, ArtConfig, Color};
///
/// let config = ArtConfig::new(vec![Color::rgb(255, 0, 0)], 42, 0.01, 3, 0.5).unwrap();
/// let v = noise(10.0, 20.0, &config);
/// assert!((0.0..=1.0).contains(&v));
/// ```
#[inline]
pub fn noise(x: f64, y: f64, config: &ArtConfig) -> f64 {
    Fbm::from_config(config).sample(x, y)
}
