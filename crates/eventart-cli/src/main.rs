//! EventArt CLI - previews and seed management for seeded event art
//!
//! This binary samples and previews configurations in the terminal and runs
//! the seed refresh policy against a local state file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use eventart_cli::commands;
use eventart_cli::commands::preview::PreviewOptions;
use eventart_cli::commands::refresh::RefreshOptions;
use eventart_cli::source::SourceArgs;

/// EventArt - Deterministic seeded event art
#[derive(Parser)]
#[command(name = "eventart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the color and noise value at one coordinate
    Sample {
        #[command(flatten)]
        source: SourceArgs,

        /// X coordinate
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Y coordinate
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a configuration and draw it in the terminal
    Preview {
        #[command(flatten)]
        source: SourceArgs,

        /// Width in pixels (diameter with --orb)
        #[arg(long, default_value_t = 64)]
        width: u32,

        /// Height in pixels (ignored with --orb)
        #[arg(long, default_value_t = 32)]
        height: u32,

        /// Sample once per STRIDE x STRIDE cell and upscale
        #[arg(long, default_value_t = 1)]
        stride: u32,

        /// Field X offset of the top-left pixel
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        origin_x: f64,

        /// Field Y offset of the top-left pixel
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        origin_y: f64,

        /// Render the circular orb
        #[arg(long)]
        orb: bool,

        /// Orb animation phase
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        phase: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the available presets
    Presets {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the BLAKE3 fingerprint of a configuration
    Fingerprint {
        #[command(flatten)]
        source: SourceArgs,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Reuse or replace the stored seed according to the refresh interval
    Refresh {
        /// State file (default: <data dir>/eventart/seed.json)
        #[arg(long)]
        state: Option<PathBuf>,

        /// Age in hours after which the stored seed is replaced
        #[arg(long, default_value_t = 24)]
        interval_hours: u64,

        /// Replace the seed regardless of its age
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sample { source, x, y, json } => commands::sample::run(&source, x, y, json),
        Commands::Preview {
            source,
            width,
            height,
            stride,
            origin_x,
            origin_y,
            orb,
            phase,
            json,
        } => {
            let options = PreviewOptions {
                width,
                height,
                stride,
                origin: [origin_x, origin_y],
                orb,
                phase,
            };
            commands::preview::run(&source, &options, json)
        }
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Fingerprint { source, json } => commands::fingerprint::run(&source, json),
        Commands::Refresh {
            state,
            interval_hours,
            force,
            json,
        } => {
            let options = RefreshOptions {
                state,
                interval_hours,
                force,
            };
            commands::refresh::run(&options, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
