//! Refresh command implementation
//!
//! Runs the seed refresh policy against the file-backed store: reuse the
//! stored seed while it is younger than the interval, otherwise mint and
//! persist a new one.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use eventart::refresh::{self, RefreshPolicy, Resolution, SeedStore};
use rand::RngCore;
use serde::Serialize;

use super::json_output::{emit, error_codes, JsonError};
use crate::store::FileSeedStore;

/// Options of the refresh command.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOptions {
    /// State file (default: the user data directory).
    pub state: Option<PathBuf>,
    pub interval_hours: u64,
    /// Mint a new seed regardless of age.
    pub force: bool,
}

/// JSON result of the refresh command.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResult {
    pub seed: u32,
    pub preset: &'static str,
    pub stamped_at: i64,
    pub refreshed: bool,
    pub state_file: String,
}

/// Resolve against `store` at time `now`, saving when a seed is minted.
pub fn refresh_store<S, R>(
    store: &S,
    options: &RefreshOptions,
    now: i64,
    rng: &mut R,
) -> Result<Resolution, eventart::StoreError>
where
    S: SeedStore + ?Sized,
    R: RngCore + ?Sized,
{
    let policy = RefreshPolicy::new(Duration::from_secs(options.interval_hours.saturating_mul(3600)));
    if options.force {
        let resolution = RefreshPolicy::mint(now, rng);
        store.save(&resolution.record)?;
        return Ok(resolution);
    }
    refresh::refresh_with_store(store, &policy, now, rng)
}

fn open_store(options: &RefreshOptions) -> Result<FileSeedStore> {
    match &options.state {
        Some(path) => Ok(FileSeedStore::new(path)),
        None => FileSeedStore::open_default(),
    }
}

/// Run the refresh command.
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(options: &RefreshOptions, json_output: bool) -> Result<ExitCode> {
    let now = chrono::Utc::now().timestamp();
    let mut rng = rand::thread_rng();

    if json_output {
        let outcome = open_store(options)
            .map_err(|e| JsonError::new(error_codes::STORE, e.to_string()))
            .and_then(|store| {
                refresh_store(&store, options, now, &mut rng)
                    .map(|resolution| to_result(&resolution, &store))
                    .map_err(|e| {
                        JsonError::new(error_codes::STORE, e.to_string())
                            .with_file(store.path().display().to_string())
                    })
            });
        return emit(outcome);
    }

    let store = open_store(options)?;
    let resolution = refresh_store(&store, options, now, &mut rng)
        .with_context(|| format!("Failed to refresh seed in {}", store.path().display()))?;

    let status = if resolution.refreshed {
        "REFRESHED".green().bold()
    } else {
        "KEPT".cyan().bold()
    };
    println!("{} seed {}", status, resolution.record.seed);
    println!("  {}: {}", "Preset".dimmed(), resolution.preset);
    println!("  {}: {}", "Stamped".dimmed(), format_timestamp(resolution.record.stamped_at));
    println!("  {}: {}", "State file".dimmed(), store.path().display());

    Ok(ExitCode::SUCCESS)
}

fn to_result(resolution: &Resolution, store: &FileSeedStore) -> RefreshResult {
    RefreshResult {
        seed: resolution.record.seed,
        preset: resolution.preset.name(),
        stamped_at: resolution.record.stamped_at,
        refreshed: resolution.refreshed,
        state_file: store.path().display().to_string(),
    }
}

fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventart::refresh::{MemorySeedStore, SeedRecord};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn options(force: bool) -> RefreshOptions {
        RefreshOptions {
            state: None,
            interval_hours: 24,
            force,
        }
    }

    #[test]
    fn test_keeps_fresh_seed() {
        let record = SeedRecord {
            seed: 77,
            stamped_at: 1_000,
        };
        let store = MemorySeedStore::with_record(record);
        let mut rng = Pcg32::seed_from_u64(1);
        let resolution = refresh_store(&store, &options(false), 2_000, &mut rng).unwrap();
        assert!(!resolution.refreshed);
        assert_eq!(resolution.record, record);
    }

    #[test]
    fn test_force_mints_and_saves() {
        let record = SeedRecord {
            seed: 77,
            stamped_at: 1_000,
        };
        let store = MemorySeedStore::with_record(record);
        let mut rng = Pcg32::seed_from_u64(1);
        let resolution = refresh_store(&store, &options(true), 2_000, &mut rng).unwrap();
        assert!(resolution.refreshed);
        assert_eq!(resolution.record.stamped_at, 2_000);
        assert_eq!(store.load().unwrap(), Some(resolution.record));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00+00:00");
    }
}
