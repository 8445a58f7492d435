//! Property-based range tests for EventArt using proptest.
//!
//! These tests verify that every stage of the pipeline is total: arbitrary
//! coordinates, seeds and configuration parameters never panic and always
//! land in the documented ranges.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p eventart-tests --test proptest_ranges
//! ```

use proptest::prelude::*;

use eventart::hash::lattice_hash;
use eventart::palette::color_at;
use eventart::{field_value, noise, sample, ArtConfig, Color};

/// Strategy for any f64, including NaN, infinities and huge magnitudes.
fn any_coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => -1e6f64..1e6f64,
        1 => prop::num::f64::ANY,
    ]
}

fn any_color() -> impl Strategy<Value = Color> {
    any::<[u8; 4]>().prop_map(Color::from_rgba8)
}

/// Strategy for valid configurations.
fn valid_config() -> impl Strategy<Value = ArtConfig> {
    (
        prop::collection::vec(any_color(), 1..6),
        any::<u32>(),
        1e-4f64..10.0,
        1u8..=8,
        0.01f64..0.99,
    )
        .prop_map(|(palette, seed, scale, octaves, persistence)| {
            ArtConfig::new(palette, seed, scale, octaves, persistence).unwrap()
        })
}

proptest! {
    /// The hash kernel maps the whole integer domain into [0, 1).
    #[test]
    fn lattice_hash_in_unit_interval(ix in any::<i64>(), iy in any::<i64>(), seed in any::<u32>()) {
        let v = lattice_hash(ix, iy, seed);
        prop_assert!((0.0..1.0).contains(&v), "lattice_hash = {}", v);
    }

    /// Single-octave noise stays in [0, 1) for any coordinate.
    #[test]
    fn field_value_in_unit_interval(x in any_coordinate(), y in any_coordinate(), seed in any::<u32>()) {
        let v = field_value(x, y, seed);
        prop_assert!((0.0..1.0).contains(&v), "field_value({}, {}) = {}", x, y, v);
    }

    /// Composite noise stays in [0, 1] for any valid configuration.
    #[test]
    fn noise_in_unit_interval(config in valid_config(), x in any_coordinate(), y in any_coordinate()) {
        let v = noise(x, y, &config);
        prop_assert!((0.0..=1.0).contains(&v), "noise({}, {}) = {}", x, y, v);
    }

    /// Sampling is total and repeatable.
    #[test]
    fn sample_is_repeatable(config in valid_config(), x in any_coordinate(), y in any_coordinate()) {
        prop_assert_eq!(sample(x, y, &config), sample(x, y, &config));
    }

    /// Palette mapping never panics, including empty palettes and NaN.
    #[test]
    fn color_at_never_panics(
        stops in prop::collection::vec(any_color(), 0..8),
        t in prop::num::f64::ANY,
    ) {
        let _ = color_at(t, &stops);
    }

    /// Mapped channels never leave the range spanned by the two stops.
    #[test]
    fn color_at_between_stops(a in any_color(), b in any_color(), t in 0.0f64..=1.0) {
        let c = color_at(t, &[a, b]);
        for (lo, hi, v) in [(a.r, b.r, c.r), (a.g, b.g, c.g), (a.b, b.b, c.b), (a.a, b.a, c.a)] {
            prop_assert!(lo.min(hi) <= v && v <= lo.max(hi));
        }
    }

    /// Single-stop palettes ignore `t` entirely.
    #[test]
    fn single_stop_is_constant(c in any_color(), t in prop::num::f64::ANY) {
        prop_assert_eq!(color_at(t, &[c]), c);
    }

    /// Invalid parameters are rejected, never accepted.
    #[test]
    fn out_of_range_persistence_rejected(p in prop_oneof![-10.0f64..=0.0, 1.0f64..10.0]) {
        prop_assert!(ArtConfig::new(vec![Color::white()], 0, 0.01, 3, p).is_err());
    }

    #[test]
    fn non_positive_scale_rejected(s in -10.0f64..=0.0) {
        prop_assert!(ArtConfig::new(vec![Color::white()], 0, s, 3, 0.5).is_err());
    }
}
