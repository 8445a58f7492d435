//! Render surfaces that paint configurations into pixel buffers.
//!
//! These are the reference consumers of the sampling pipeline: full-frame
//! gradients (one sample per pixel), thumbnails (one sample per coarse cell,
//! bilinearly upscaled) and the circular animated orb.

use crate::color::Color;
use crate::config::ArtConfig;
use crate::error::RenderError;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 4096;

/// Field offset, in pixels, per unit of orb animation phase.
pub const ORB_DRIFT: [f64; 2] = [48.0, 32.0];

/// A 2D RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl ArtBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    /// BLAKE3 hash of the RGBA bytes as a 64-character hex string.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.width.to_le_bytes());
        hasher.update(&self.height.to_le_bytes());
        hasher.update(&self.to_rgba8());
        hasher.finalize().to_hex().to_string()
    }
}

fn validate_dimensions(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyDimensions { width, height });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(RenderError::TooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Render one sample per pixel; pixel `(px, py)` samples `origin + (px, py)`.
pub fn render(
    config: &ArtConfig,
    width: u32,
    height: u32,
    origin: [f64; 2],
) -> Result<ArtBuffer, RenderError> {
    validate_dimensions(width, height)?;

    let mut buffer = ArtBuffer::new(width, height, Color::TRANSPARENT);
    for py in 0..height {
        for px in 0..width {
            let color = config.color_at(origin[0] + px as f64, origin[1] + py as f64);
            buffer.set(px, py, color);
        }
    }
    Ok(buffer)
}

/// Render by sampling once per `stride × stride` cell and upscaling.
///
/// Coarse samples sit at `origin + (cx * stride, cy * stride)`; pixels in
/// between are bilinearly blended from the four surrounding samples. A
/// stride of 0 is treated as 1, and stride 1 is identical to [`render`].
pub fn render_strided(
    config: &ArtConfig,
    width: u32,
    height: u32,
    origin: [f64; 2],
    stride: u32,
) -> Result<ArtBuffer, RenderError> {
    validate_dimensions(width, height)?;
    let stride = stride.max(1);

    let cols = ((width - 1) / stride + 2) as usize;
    let rows = ((height - 1) / stride + 2) as usize;
    let mut coarse = Vec::with_capacity(cols * rows);
    for cy in 0..rows {
        for cx in 0..cols {
            let x = origin[0] + (cx as u64 * stride as u64) as f64;
            let y = origin[1] + (cy as u64 * stride as u64) as f64;
            coarse.push(config.color_at(x, y));
        }
    }

    let step = stride as f64;
    let mut buffer = ArtBuffer::new(width, height, Color::TRANSPARENT);
    for py in 0..height {
        let cy = (py / stride) as usize;
        let fy = (py % stride) as f64 / step;
        for px in 0..width {
            let cx = (px / stride) as usize;
            let fx = (px % stride) as f64 / step;

            let c00 = coarse[cy * cols + cx];
            let c10 = coarse[cy * cols + cx + 1];
            let c01 = coarse[(cy + 1) * cols + cx];
            let c11 = coarse[(cy + 1) * cols + cx + 1];

            let top = c00.lerp(&c10, fx);
            let bottom = c01.lerp(&c11, fx);
            buffer.set(px, py, top.lerp(&bottom, fy));
        }
    }
    Ok(buffer)
}

/// Render a circular orb of the given diameter at animation `phase`.
///
/// Pixels whose centers fall outside the disk are fully transparent; the
/// one-pixel rim is alpha-blended by coverage. The field drifts by
/// [`ORB_DRIFT`] pixels per unit of phase, so successive phases animate
/// smoothly and equal phases produce identical frames.
pub fn render_orb(config: &ArtConfig, diameter: u32, phase: f64) -> Result<ArtBuffer, RenderError> {
    validate_dimensions(diameter, diameter)?;

    let phase = if phase.is_finite() { phase } else { 0.0 };
    let radius = diameter as f64 / 2.0;
    let offset_x = phase * ORB_DRIFT[0];
    let offset_y = phase * ORB_DRIFT[1];

    let mut buffer = ArtBuffer::new(diameter, diameter, Color::TRANSPARENT);
    for py in 0..diameter {
        for px in 0..diameter {
            let dx = px as f64 + 0.5 - radius;
            let dy = py as f64 + 0.5 - radius;
            let coverage = (radius - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }

            let mut color = config.color_at(px as f64 + offset_x, py as f64 + offset_y);
            color.a = (color.a as f64 * coverage).round() as u8;
            buffer.set(px, py, color);
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn test_render_dimensions() {
        let buffer = render(&presets::aurora(1), 17, 9, [0.0, 0.0]).unwrap();
        assert_eq!(buffer.width, 17);
        assert_eq!(buffer.height, 9);
        assert_eq!(buffer.data.len(), 17 * 9);
        assert_eq!(buffer.to_rgba8().len(), 17 * 9 * 4);
    }

    #[test]
    fn test_render_matches_sampling() {
        let config = presets::sunset(3);
        let buffer = render(&config, 8, 8, [100.0, -20.0]).unwrap();
        assert_eq!(buffer.get(5, 2), config.color_at(105.0, -18.0));
    }

    #[test]
    fn test_render_rejects_bad_dimensions() {
        let config = presets::ocean(0);
        assert_eq!(
            render(&config, 0, 10, [0.0, 0.0]),
            Err(RenderError::EmptyDimensions { width: 0, height: 10 })
        );
        assert!(matches!(
            render(&config, 10, MAX_DIMENSION + 1, [0.0, 0.0]),
            Err(RenderError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_stride_one_equals_full_render() {
        let config = presets::ember(9);
        let full = render(&config, 13, 7, [4.0, 4.0]).unwrap();
        assert_eq!(render_strided(&config, 13, 7, [4.0, 4.0], 1).unwrap(), full);
        assert_eq!(render_strided(&config, 13, 7, [4.0, 4.0], 0).unwrap(), full);
    }

    #[test]
    fn test_stride_hits_samples_on_lattice() {
        let config = presets::forest(2);
        let thumb = render_strided(&config, 33, 17, [0.0, 0.0], 8).unwrap();
        assert_eq!(thumb.get(0, 0), config.color_at(0.0, 0.0));
        assert_eq!(thumb.get(16, 8), config.color_at(16.0, 8.0));
        assert_eq!(thumb.get(32, 16), config.color_at(32.0, 16.0));
    }

    #[test]
    fn test_orb_transparent_outside_disk() {
        let orb = render_orb(&presets::neon(4), 32, 0.0).unwrap();
        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
            assert_eq!(orb.get(x, y), Color::TRANSPARENT);
        }
        assert_eq!(orb.get(16, 16).a, 255);
    }

    #[test]
    fn test_orb_phase_deterministic_and_animated() {
        let config = presets::dusk(8);
        let a = render_orb(&config, 24, 0.25).unwrap();
        let b = render_orb(&config, 24, 0.25).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());

        let c = render_orb(&config, 24, 1.0).unwrap();
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn test_content_hash_includes_dimensions() {
        let a = ArtBuffer::new(2, 3, Color::white());
        let b = ArtBuffer::new(3, 2, Color::white());
        assert_eq!(a.to_rgba8(), b.to_rgba8());
        assert_ne!(a.content_hash(), b.content_hash());
    }
}
