//! Integer lattice hash.
//!
//! Every pseudo-random value in the sampling pipeline comes from this module.
//! The kernel is a pure function of `(ix, iy, seed)`: there is no RNG object,
//! no hidden state and no platform-dependent source, so the same inputs give
//! the same bits in every process on every platform.

/// Spreads the seed across all 64 bits (golden ratio multiplier).
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;
/// Odd multiplier for the x lattice coordinate.
const X_MIX: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// Odd multiplier for the y lattice coordinate.
const Y_MIX: u64 = 0x1656_67B1_9E37_79F9;

/// 2^-53, maps the top 53 bits of a hash onto [0, 1).
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// SplitMix64 finalizer (multiply-xorshift cascade).
#[inline]
pub fn avalanche(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Hash a lattice point to 64 well-mixed bits.
#[inline]
pub fn lattice_bits(ix: i64, iy: i64, seed: u32) -> u64 {
    // Offset so no seed starts from the all-zero state, a fixed point of `avalanche`.
    let mut h = (seed as u64).wrapping_add(1).wrapping_mul(SEED_MIX);
    h = avalanche(h ^ (ix as u64).wrapping_mul(X_MIX));
    avalanche(h ^ (iy as u64).wrapping_mul(Y_MIX))
}

/// Hash a lattice point to a scalar in [0, 1).
///
/// Defined for the whole `i64 × i64 × u32` domain; all arithmetic wraps.
///
/// # Example
/// ```
/// use eventart::hash::lattice_hash;
///
/// let v = lattice_hash(3, -5, 42);
/// assert!((0.0..1.0).contains(&v));
/// assert_eq!(v, lattice_hash(3, -5, 42));
/// ```
#[inline]
pub fn lattice_hash(ix: i64, iy: i64, seed: u32) -> f64 {
    (lattice_bits(ix, iy, seed) >> 11) as f64 * UNIT_SCALE
}

/// Seed for the given octave of a multi-octave field.
///
/// Octaves must not share a seed, otherwise the fractal sum collapses into a
/// rescaled copy of a single layer.
#[inline]
pub fn octave_seed(base_seed: u32, octave: u8) -> u32 {
    base_seed.wrapping_add(octave as u32)
}
