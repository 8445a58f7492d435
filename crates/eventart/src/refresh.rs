//! Seed refresh policy.
//!
//! A consumer keeps one seed and the time it was minted in a key-value store.
//! On cold start the policy either reuses that seed, keeping the displayed
//! art stable, or mints a new one once the refresh interval has elapsed.
//! Fresh seeds come from a caller-supplied RNG; the sampling pipeline itself
//! never sees it.

use std::sync::Mutex;
use std::time::Duration;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::ArtConfig;
use crate::error::StoreError;
use crate::presets::Preset;

/// Default refresh interval (one day).
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// The persisted state: one seed and the Unix time (seconds) it was minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub seed: u32,
    pub stamped_at: i64,
}

impl SeedRecord {
    /// Preset chosen by this record's seed.
    pub fn preset(&self) -> Preset {
        Preset::for_seed(self.seed)
    }
}

/// Outcome of resolving the stored seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The record to display (and, if `refreshed`, to persist).
    pub record: SeedRecord,
    /// Preset selected by `record.seed`.
    pub preset: Preset,
    /// Whether a new seed was minted.
    pub refreshed: bool,
}

impl Resolution {
    /// Configuration to paint with.
    pub fn config(&self) -> ArtConfig {
        self.preset.config(self.record.seed)
    }
}

/// Decides when a stored seed is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    pub interval: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl RefreshPolicy {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Whether `record` must be replaced at time `now`.
    ///
    /// Records stamped in the future (clock moved backwards) are stale too,
    /// otherwise they would pin the same art until the clock caught up.
    pub fn is_stale(&self, record: &SeedRecord, now: i64) -> bool {
        let age = now.saturating_sub(record.stamped_at);
        if age < 0 {
            return true;
        }
        age as u64 >= self.interval.as_secs()
    }

    /// Reuse `stored` if still fresh, otherwise mint a new seed from `rng`.
    pub fn resolve<R: RngCore + ?Sized>(
        &self,
        stored: Option<SeedRecord>,
        now: i64,
        rng: &mut R,
    ) -> Resolution {
        match stored {
            Some(record) if !self.is_stale(&record, now) => Resolution {
                record,
                preset: record.preset(),
                refreshed: false,
            },
            _ => Self::mint(now, rng),
        }
    }

    /// Unconditionally mint a new record stamped at `now`.
    pub fn mint<R: RngCore + ?Sized>(now: i64, rng: &mut R) -> Resolution {
        let record = SeedRecord {
            seed: rng.next_u32(),
            stamped_at: now,
        };
        Resolution {
            record,
            preset: record.preset(),
            refreshed: true,
        }
    }
}

/// Key-value storage for the single seed record.
pub trait SeedStore {
    /// Load the stored record, `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<SeedRecord>, StoreError>;

    /// Overwrite the stored record.
    fn save(&self, record: &SeedRecord) -> Result<(), StoreError>;
}

/// In-process store, mainly for tests and ephemeral consumers.
#[derive(Debug, Default)]
pub struct MemorySeedStore {
    record: Mutex<Option<SeedRecord>>,
}

impl MemorySeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: SeedRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }
}

impl SeedStore for MemorySeedStore {
    fn load(&self) -> Result<Option<SeedRecord>, StoreError> {
        let guard = self.record.lock().unwrap_or_else(|e| e.into_inner());
        Ok(*guard)
    }

    fn save(&self, record: &SeedRecord) -> Result<(), StoreError> {
        let mut guard = self.record.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(*record);
        Ok(())
    }
}

/// Load, resolve and persist. The store is written only when a seed is minted.
pub fn refresh_with_store<S, R>(
    store: &S,
    policy: &RefreshPolicy,
    now: i64,
    rng: &mut R,
) -> Result<Resolution, StoreError>
where
    S: SeedStore + ?Sized,
    R: RngCore + ?Sized,
{
    let stored = store.load()?;
    let resolution = policy.resolve(stored, now, rng);
    if resolution.refreshed {
        store.save(&resolution.record)?;
    }
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const HOUR: i64 = 60 * 60;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_missing_record_mints() {
        let resolution = RefreshPolicy::default().resolve(None, 1_000, &mut rng());
        assert!(resolution.refreshed);
        assert_eq!(resolution.record.stamped_at, 1_000);
        assert_eq!(resolution.preset, Preset::for_seed(resolution.record.seed));
    }

    #[test]
    fn test_fresh_record_reused() {
        let record = SeedRecord {
            seed: 99,
            stamped_at: 0,
        };
        let resolution = RefreshPolicy::default().resolve(Some(record), 23 * HOUR, &mut rng());
        assert!(!resolution.refreshed);
        assert_eq!(resolution.record, record);
        assert_eq!(resolution.config(), Preset::for_seed(99).config(99));
    }

    #[test]
    fn test_stale_at_interval_boundary() {
        let policy = RefreshPolicy::new(Duration::from_secs(24 * 3600));
        let record = SeedRecord {
            seed: 1,
            stamped_at: 100,
        };
        assert!(!policy.is_stale(&record, 100 + 24 * HOUR - 1));
        assert!(policy.is_stale(&record, 100 + 24 * HOUR));
    }

    #[test]
    fn test_future_record_is_stale() {
        let record = SeedRecord {
            seed: 1,
            stamped_at: 10_000,
        };
        let resolution = RefreshPolicy::default().resolve(Some(record), 5_000, &mut rng());
        assert!(resolution.refreshed);
        assert_eq!(resolution.record.stamped_at, 5_000);
    }

    #[test]
    fn test_minting_is_reproducible_with_seeded_rng() {
        let a = RefreshPolicy::mint(0, &mut rng());
        let b = RefreshPolicy::mint(0, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_store_written_only_on_refresh() {
        let record = SeedRecord {
            seed: 5,
            stamped_at: 0,
        };
        let store = MemorySeedStore::with_record(record);
        let policy = RefreshPolicy::default();

        let kept = refresh_with_store(&store, &policy, HOUR, &mut rng()).unwrap();
        assert!(!kept.refreshed);
        assert_eq!(store.load().unwrap(), Some(record));

        let fresh = refresh_with_store(&store, &policy, 48 * HOUR, &mut rng()).unwrap();
        assert!(fresh.refreshed);
        assert_eq!(store.load().unwrap(), Some(fresh.record));
    }

    #[test]
    fn test_empty_store_populated() {
        let store = MemorySeedStore::new();
        assert_eq!(store.load().unwrap(), None);
        let resolution =
            refresh_with_store(&store, &RefreshPolicy::default(), 42, &mut rng()).unwrap();
        assert_eq!(store.load().unwrap(), Some(resolution.record));
    }

    #[test]
    fn test_record_serde_shape() {
        let record = SeedRecord {
            seed: 7,
            stamped_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"seed":7,"stamped_at":1700000000}"#);
    }
}
