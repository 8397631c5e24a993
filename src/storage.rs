// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::warn;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Tripclip", "tripclip"));

pub const TRIPS_KEY: &str = "trips";
pub const EXPENSES_KEY: &str = "expenses";
pub const SELECTED_TRIP_KEY: &str = "selectedTripId";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.to_path_buf())
}

/// Flat key-value snapshot store: one JSON file per key under the data dir.
///
/// Reads treat absence and unreadable content alike as "missing" so each
/// entry can fall back to built-in defaults independently. Writes are
/// best-effort; a failure is logged and the in-memory state stays the source
/// of truth until the next (full) snapshot write.
pub struct Snapshots {
    dir: PathBuf,
}

impl Snapshots {
    pub fn open_default() -> Result<Self> {
        Ok(Snapshots { dir: data_dir()? })
    }

    pub fn open_at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(Snapshots { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Raw read of a key. `None` covers both a missing entry and an I/O
    /// failure; only the latter is logged.
    pub fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Some(s),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("failed to read snapshot '{}': {}", key, e);
                None
            }
        }
    }

    /// Raw best-effort write of a key.
    pub fn set(&self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path_for(key), value) {
            warn!("failed to write snapshot '{}': {}", key, e);
        }
    }

    /// Decodes a snapshot entry, treating malformed content as missing.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("snapshot '{}' is malformed, using defaults: {}", key, e);
                None
            }
        }
    }

    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(s) => self.set(key, &s),
            Err(e) => warn!("failed to encode snapshot '{}': {}", key, e),
        }
    }
}
