//! Preview command implementation
//!
//! Renders a configuration and draws it in the terminal with truecolor
//! half-block characters (two pixel rows per text row). No image files are
//! written.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use eventart::render::{self, ArtBuffer};
use eventart::{ArtConfig, RenderError};
use serde::Serialize;

use super::json_output::{emit, error_codes, JsonError};
use crate::source::{self, SourceArgs};

/// Alpha below which a pixel is drawn as background.
const ALPHA_CUTOFF: u8 = 128;

/// Render settings for the preview command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub origin: [f64; 2],
    /// Render the circular orb instead of a rectangle (uses `width` as diameter).
    pub orb: bool,
    pub phase: f64,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            stride: 1,
            origin: [0.0, 0.0],
            orb: false,
            phase: 0.0,
        }
    }
}

/// JSON result of the preview command.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResult {
    pub seed: u32,
    pub fingerprint: String,
    pub mode: &'static str,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub content_hash: String,
}

/// Render the buffer described by `options`.
pub fn render_preview(config: &ArtConfig, options: &PreviewOptions) -> Result<ArtBuffer, RenderError> {
    if options.orb {
        render::render_orb(config, options.width, options.phase)
    } else if options.stride > 1 {
        render::render_strided(
            config,
            options.width,
            options.height,
            options.origin,
            options.stride,
        )
    } else {
        render::render(config, options.width, options.height, options.origin)
    }
}

/// Terminal lines for a buffer, two pixel rows per line.
pub fn ansi_lines(buffer: &ArtBuffer) -> Vec<String> {
    let mut lines = Vec::with_capacity(buffer.height.div_ceil(2) as usize);
    for row in (0..buffer.height).step_by(2) {
        let mut line = String::new();
        for x in 0..buffer.width {
            let top = buffer.get(x, row);
            let bottom = (row + 1 < buffer.height).then(|| buffer.get(x, row + 1));
            let top_visible = top.a >= ALPHA_CUTOFF;
            let bottom_visible = bottom.is_some_and(|c| c.a >= ALPHA_CUTOFF);

            let cell = match (top_visible, bottom) {
                (true, Some(b)) if bottom_visible => "▀"
                    .truecolor(top.r, top.g, top.b)
                    .on_truecolor(b.r, b.g, b.b)
                    .to_string(),
                (true, _) => "▀".truecolor(top.r, top.g, top.b).to_string(),
                (false, Some(b)) if bottom_visible => "▄".truecolor(b.r, b.g, b.b).to_string(),
                _ => " ".to_string(),
            };
            line.push_str(&cell);
        }
        lines.push(line);
    }
    lines
}

/// Run the preview command.
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &SourceArgs, options: &PreviewOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return emit(run_json(args, options));
    }

    let resolved = source::resolve(args)?;
    let buffer = render_preview(&resolved.config, options)?;

    println!("{} {}", "Source:".cyan().bold(), resolved.origin);
    println!(
        "{} {}  {} {}x{}",
        "Seed:".dimmed(),
        resolved.config.seed(),
        "Size:".dimmed(),
        buffer.width,
        buffer.height
    );
    for line in ansi_lines(&buffer) {
        println!("{}", line);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(args: &SourceArgs, options: &PreviewOptions) -> Result<PreviewResult, JsonError> {
    let resolved = source::resolve(args).map_err(|e| e.to_json_error())?;
    let buffer = render_preview(&resolved.config, options)
        .map_err(|e| JsonError::new(error_codes::RENDER, e.to_string()))?;

    Ok(PreviewResult {
        seed: resolved.config.seed(),
        fingerprint: resolved.config.fingerprint(),
        mode: if options.orb {
            "orb"
        } else if options.stride > 1 {
            "strided"
        } else {
            "full"
        },
        width: buffer.width,
        height: buffer.height,
        stride: options.stride.max(1),
        content_hash: buffer.content_hash(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventart::{presets, Color};

    #[test]
    fn test_ansi_lines_pairs_rows() {
        let buffer = ArtBuffer::new(4, 5, Color::white());
        let lines = ansi_lines(&buffer);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_transparent_pixels_are_blank() {
        let buffer = ArtBuffer::new(3, 2, Color::TRANSPARENT);
        for line in ansi_lines(&buffer) {
            assert_eq!(line, "   ");
        }
    }

    #[test]
    fn test_render_preview_modes() {
        let config = presets::citrus(5);
        let full = render_preview(&config, &PreviewOptions::default()).unwrap();
        assert_eq!((full.width, full.height), (64, 32));

        let orb = render_preview(
            &config,
            &PreviewOptions {
                orb: true,
                width: 20,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!((orb.width, orb.height), (20, 20));
        assert_eq!(orb.get(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_json_result() {
        let args = SourceArgs {
            seed: Some(9),
            ..Default::default()
        };
        let options = PreviewOptions {
            stride: 4,
            ..Default::default()
        };
        let result = run_json(&args, &options).unwrap();
        assert_eq!(result.mode, "strided");
        assert_eq!(result.fingerprint, presets::for_seed(9).fingerprint());
        assert_eq!(result.content_hash.len(), 64);
    }

    #[test]
    fn test_json_render_error() {
        let options = PreviewOptions {
            width: 0,
            ..Default::default()
        };
        let err = run_json(&SourceArgs::default(), &options).unwrap_err();
        assert_eq!(err.code, error_codes::RENDER);
    }
}
