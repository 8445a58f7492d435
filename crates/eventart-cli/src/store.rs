//! File-backed seed store.
//!
//! Persists the single [`SeedRecord`] as a small JSON document, by default
//! under the user's data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eventart::refresh::{SeedRecord, SeedStore};
use eventart::StoreError;

/// File name of the state document.
pub const STATE_FILE: &str = "seed.json";

/// Seed store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct FileSeedStore {
    path: PathBuf,
}

impl FileSeedStore {
    /// Store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (`<data dir>/eventart/seed.json`).
    pub fn open_default() -> Result<Self> {
        let path = Self::default_path().context("Failed to determine data directory")?;
        Ok(Self::new(path))
    }

    /// Default state file path (XDG-compatible).
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("eventart").join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedStore for FileSeedStore {
    fn load(&self) -> Result<Option<SeedRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, record: &SeedRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        // Write-then-rename so a crash never leaves a truncated record.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
