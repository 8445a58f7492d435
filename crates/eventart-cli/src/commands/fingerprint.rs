//! Fingerprint command implementation
//!
//! Prints the BLAKE3 fingerprint of a configuration, the key consumers use
//! to cache rendered art.

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use super::json_output::emit;
use crate::source::{self, SourceArgs};

#[derive(Debug, Clone, Serialize)]
pub struct FingerprintResult {
    pub seed: u32,
    pub fingerprint: String,
}

pub fn run(args: &SourceArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let outcome = source::resolve(args)
            .map(|resolved| FingerprintResult {
                seed: resolved.config.seed(),
                fingerprint: resolved.config.fingerprint(),
            })
            .map_err(|e| e.to_json_error());
        return emit(outcome);
    }

    let resolved = source::resolve(args)?;
    println!("{}", resolved.config.fingerprint());
    Ok(ExitCode::SUCCESS)
}
