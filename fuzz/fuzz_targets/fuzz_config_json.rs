#![no_main]

use libfuzzer_sys::fuzz_target;

// Any configuration that deserializes must sample without panicking and stay in range.
fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<eventart::ArtConfig>(data) else {
        return;
    };
    for &(x, y) in &[(0.0, 0.0), (1e3, -1e3), (f64::MAX, f64::MIN), (f64::NAN, 1.5)] {
        let v = config.noise(x, y);
        assert!((0.0..=1.0).contains(&v));
        let _ = config.color_at(x, y);
    }
});
