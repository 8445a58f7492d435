//! Sample command implementation
//!
//! Prints the color and normalized noise value at one coordinate.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use eventart::Color;
use serde::Serialize;

use super::json_output::emit;
use crate::source::{self, Resolved, SourceArgs};

/// JSON result of the sample command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleResult {
    pub x: f64,
    pub y: f64,
    pub seed: u32,
    pub value: f64,
    pub color: Color,
}

/// Sample a resolved configuration.
pub fn sample(resolved: &Resolved, x: f64, y: f64) -> SampleResult {
    let config = &resolved.config;
    SampleResult {
        x,
        y,
        seed: config.seed(),
        value: config.noise(x, y),
        color: config.color_at(x, y),
    }
}

/// Run the sample command.
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &SourceArgs, x: f64, y: f64, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let outcome = source::resolve(args)
            .map(|resolved| sample(&resolved, x, y))
            .map_err(|e| e.to_json_error());
        return emit(outcome);
    }

    let resolved = source::resolve(args)?;
    let result = sample(&resolved, x, y);
    let c = result.color;

    println!("{} {}", "Source:".cyan().bold(), resolved.origin);
    println!("{} {}", "Seed:".dimmed(), result.seed);
    println!("{} ({}, {})", "Point:".dimmed(), x, y);
    println!("{} {:.6}", "Value:".dimmed(), result.value);
    println!(
        "{} {} {}",
        "Color:".dimmed(),
        c,
        "    ".on_truecolor(c.r, c.g, c.b)
    );

    Ok(ExitCode::SUCCESS)
}
