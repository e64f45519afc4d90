// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File-backed status store.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::{AlarmStatus, ArmingStatus, Sensor};

use super::{MemoryStore, StatusStore};

/// A [`StatusStore`] persisted as a JSON snapshot on disk.
///
/// The store keeps its working state in a [`MemoryStore`] and rewrites the
/// snapshot file after every mutation. Loading is lenient: a missing or
/// unparseable file yields a fresh default state, so a corrupted snapshot
/// never prevents the system from starting. Save failures are logged and
/// swallowed; callers that need a hard guarantee can call [`save`](Self::save)
/// explicitly.
///
/// # Examples
///
/// ```no_run
/// use vigil_lib::store::{FileStore, StatusStore};
/// use vigil_lib::types::{Sensor, SensorKind};
///
/// let mut store = FileStore::open("security-state.json");
/// store.add_sensor(Sensor::new("Front Door", SensorKind::Door));
/// // The sensor set is already on disk at this point.
/// ```
#[derive(Debug)]
pub struct FileStore {
    /// Snapshot file location.
    path: PathBuf,
    /// Working state; the snapshot is a serialization of this.
    state: MemoryStore,
}

impl FileStore {
    /// Opens a store backed by the given snapshot file.
    ///
    /// Returns a store with default state if the file doesn't exist or
    /// can't be read.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = Self::load(&path);
        Self { path, state }
    }

    /// Returns the snapshot file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot from disk.
    fn load(path: &Path) -> MemoryStore {
        if !path.exists() {
            tracing::info!("No snapshot found at {}, using defaults", path.display());
            return MemoryStore::new();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(state) => {
                    tracing::info!("Loaded status snapshot from {}", path.display());
                    state
                }
                Err(e) => {
                    tracing::error!("Failed to parse snapshot file: {e}");
                    MemoryStore::new()
                }
            },
            Err(e) => {
                tracing::error!("Failed to read snapshot file: {e}");
                MemoryStore::new()
            }
        }
    }

    /// Saves the snapshot to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized or written.
    pub fn save(&self) -> Result<(), StoreError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, contents)?;

        tracing::debug!("Saved status snapshot to {}", self.path.display());
        Ok(())
    }

    /// Saves after a mutation, logging instead of propagating failures.
    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::error!("Failed to save status snapshot: {e}");
        }
    }
}

impl StatusStore for FileStore {
    fn alarm_status(&self) -> AlarmStatus {
        self.state.alarm_status()
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.state.set_alarm_status(status);
        self.persist();
    }

    fn arming_status(&self) -> ArmingStatus {
        self.state.arming_status()
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.state.set_arming_status(status);
        self.persist();
    }

    fn sensors(&self) -> HashSet<Sensor> {
        self.state.sensors()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        self.state.add_sensor(sensor);
        self.persist();
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> bool {
        let removed = self.state.remove_sensor(sensor);
        if removed {
            self.persist();
        }
        removed
    }

    fn update_sensor(&mut self, sensor: Sensor) -> bool {
        let updated = self.state.update_sensor(sensor);
        if updated {
            self.persist();
        }
        updated
    }
}
