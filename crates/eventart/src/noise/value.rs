//! Value noise over the integer lattice.

use super::{finite_or_zero, lerp, quintic, Noise2D};
use crate::hash::lattice_hash;

/// Largest double strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Sample single-octave value noise at `(x, y)`.
///
/// Hashes the four lattice corners of the cell containing the point and
/// blends them bilinearly with quintic-smoothed offsets. The result is
/// C1-continuous across cell boundaries and lies in [0, 1).
///
/// Non-finite coordinates sample the origin.
pub fn field_value(x: f64, y: f64, seed: u32) -> f64 {
    let x = finite_or_zero(x);
    let y = finite_or_zero(y);

    let x0 = x.floor();
    let y0 = y.floor();
    // Saturating casts keep huge coordinates on the lattice edge.
    let ix = x0 as i64;
    let iy = y0 as i64;
    let ix1 = ix.wrapping_add(1);
    let iy1 = iy.wrapping_add(1);

    let u = quintic(x - x0);
    let v = quintic(y - y0);

    let c00 = lattice_hash(ix, iy, seed);
    let c10 = lattice_hash(ix1, iy, seed);
    let c01 = lattice_hash(ix, iy1, seed);
    let c11 = lattice_hash(ix1, iy1, seed);

    let top = lerp(c00, c10, u);
    let bottom = lerp(c01, c11, u);
    lerp(top, bottom, v).clamp(0.0, BELOW_ONE)
}

/// Single-octave value noise bound to a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNoise {
    seed: u32,
}

impl ValueNoise {
    /// Create a value noise field for the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The seed of this field.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Noise2D for ValueNoise {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        field_value(x, y, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_noise_deterministic() {
        let noise1 = ValueNoise::new(42);
        let noise2 = ValueNoise::new(42);

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_value_noise_range() {
        let noise = ValueNoise::new(7);
        for i in 0..1000 {
            let v = noise.sample(i as f64 * 0.173 - 50.0, i as f64 * 0.091 - 20.0);
            assert!((0.0..1.0).contains(&v), "value {} out of [0, 1)", v);
        }
    }

    #[test]
    fn test_lattice_points_match_hash() {
        for ix in -4..4 {
            for iy in -4..4 {
                assert_eq!(
                    field_value(ix as f64, iy as f64, 99),
                    lattice_hash(ix, iy, 99)
                );
            }
        }
    }

    #[test]
    fn test_continuous_across_cell_boundary() {
        let left = field_value(2.0 - 1e-9, 0.37, 3);
        let right = field_value(2.0, 0.37, 3);
        assert!((left - right).abs() < 1e-6);
    }

    #[test]
    fn test_small_step_small_change() {
        let mut max_delta: f64 = 0.0;
        for i in 0..2000 {
            let x = i as f64 * 0.0137;
            let y = i as f64 * 0.0071;
            let d = (field_value(x + 1e-3, y, 9) - field_value(x, y, 9)).abs();
            max_delta = max_delta.max(d);
        }
        assert!(max_delta < 0.05, "max delta {}", max_delta);
    }

    #[test]
    fn test_non_finite_samples_origin() {
        let origin = field_value(0.0, 0.0, 11);
        assert_eq!(field_value(f64::NAN, 0.0, 11), origin);
        assert_eq!(field_value(f64::INFINITY, f64::NEG_INFINITY, 11), origin);
    }

    #[test]
    fn test_huge_coordinates_stay_in_range() {
        let v = field_value(1e300, -1e300, 1);
        assert!((0.0..1.0).contains(&v));
    }
}
