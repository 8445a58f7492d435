//! Presets command implementation

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use eventart::{Color, Preset};
use serde::Serialize;

use super::json_output::emit;

/// Preset entry for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PresetEntry {
    pub name: &'static str,
    pub index: usize,
    pub palette: Vec<Color>,
    pub scale: f64,
    pub octaves: u8,
    pub persistence: f64,
}

/// Describe every preset, in `seed mod count` order.
pub fn entries() -> Vec<PresetEntry> {
    Preset::ALL
        .iter()
        .enumerate()
        .map(|(index, preset)| {
            let config = preset.config(0);
            PresetEntry {
                name: preset.name(),
                index,
                palette: config.palette().stops().to_vec(),
                scale: config.scale(),
                octaves: config.octaves(),
                persistence: config.persistence(),
            }
        })
        .collect()
}

/// List available presets.
pub fn run(json_output: bool) -> Result<ExitCode> {
    let entries = entries();
    if json_output {
        return emit(Ok(entries));
    }

    println!("{}", "Presets".cyan().bold());
    for entry in &entries {
        let swatches: String = entry
            .palette
            .iter()
            .map(|c| "  ".on_truecolor(c.r, c.g, c.b).to_string())
            .collect();
        println!(
            "  {:>2} {:<8} {}  {}",
            entry.index,
            entry.name.bold(),
            swatches,
            format!(
                "scale {} octaves {} persistence {}",
                entry.scale, entry.octaves, entry.persistence
            )
            .dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
