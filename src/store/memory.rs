// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory status store.

use std::collections::HashSet;

use crate::types::{AlarmStatus, ArmingStatus, Sensor};

use super::StatusStore;

/// Plain in-memory implementation of [`StatusStore`].
///
/// Starts disarmed with no alarm and an empty sensor set. This is the
/// store to inject in tests and the backing state of
/// [`FileStore`](super::FileStore).
///
/// # Examples
///
/// ```
/// use vigil_lib::store::{MemoryStore, StatusStore};
/// use vigil_lib::types::{AlarmStatus, ArmingStatus};
///
/// let store = MemoryStore::new();
/// assert_eq!(store.alarm_status(), AlarmStatus::NoAlarm);
/// assert_eq!(store.arming_status(), ArmingStatus::Disarmed);
/// assert!(store.sensors().is_empty());
/// ```
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MemoryStore {
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: HashSet<Sensor>,
}

impl MemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusStore for MemoryStore {
    fn alarm_status(&self) -> AlarmStatus {
        self.alarm_status
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) {
        self.alarm_status = status;
    }

    fn arming_status(&self) -> ArmingStatus {
        self.arming_status
    }

    fn set_arming_status(&mut self, status: ArmingStatus) {
        self.arming_status = status;
    }

    fn sensors(&self) -> HashSet<Sensor> {
        self.sensors.clone()
    }

    fn add_sensor(&mut self, sensor: Sensor) {
        self.sensors.insert(sensor);
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> bool {
        self.sensors.remove(sensor)
    }

    fn update_sensor(&mut self, sensor: Sensor) -> bool {
        // HashSet::insert keeps the stored value on collision, so replace
        // explicitly: identity-equal sensors may differ in their flag.
        if self.sensors.remove(&sensor) {
            self.sensors.insert(sensor);
            true
        } else {
            false
        }
    }
}
