//! Noise generation primitives.
//!
//! All noise functions are pure and produce identical output for identical
//! inputs. Values are in [0, 1] rather than the signed range common in
//! gradient noise, since every consumer feeds them into a palette.

mod fbm;
mod value;

pub use fbm::{noise, Fbm};
pub use value::{field_value, ValueNoise};

/// Trait for 2D scalar fields.
pub trait Noise2D {
    /// Sample the field at a continuous 2D coordinate. Returns a value in [0, 1].
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, so interpolated cells meet
/// without visible seams.
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Replace non-finite coordinates with the origin.
#[inline]
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
