//! Shared configurations and sampling grids.

use eventart::{sample, ArtConfig, Color};

/// The two-stop red to blue palette used by the reference scenarios.
pub fn red_blue() -> Vec<Color> {
    vec![Color::from_hex(0xFF0000), Color::from_hex(0x0000FF)]
}

/// `{[#FF0000, #0000FF], seed, scale 0.01, octaves 3, persistence 0.5}`.
pub fn red_blue_config(seed: u32) -> ArtConfig {
    ArtConfig::new(red_blue(), seed, 0.01, 3, 0.5)
        .unwrap_or_else(|e| panic!("reference configuration rejected: {e}"))
}

/// Colors on a `size × size` grid with `spacing` between samples, row-major.
pub fn grid_colors(config: &ArtConfig, size: u32, spacing: f64) -> Vec<Color> {
    let mut colors = Vec::with_capacity(size as usize * size as usize);
    for j in 0..size {
        for i in 0..size {
            colors.push(sample(i as f64 * spacing, j as f64 * spacing, config));
        }
    }
    colors
}
