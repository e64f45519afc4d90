// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status store abstraction and implementations.
//!
//! The store owns the authoritative alarm status, arming status, and sensor
//! set. The [`SecurityMonitor`](crate::monitor::SecurityMonitor) reads and
//! writes exclusively through the [`StatusStore`] trait and caches nothing
//! itself.
//!
//! Two implementations ship with the library:
//!
//! - [`MemoryStore`] - plain in-memory state; also the natural test double
//! - [`FileStore`] - a [`MemoryStore`] snapshot persisted as JSON on every
//!   mutation
//!
//! # Examples
//!
//! ```
//! use vigil_lib::store::{MemoryStore, StatusStore};
//! use vigil_lib::types::{ArmingStatus, Sensor, SensorKind};
//!
//! let mut store = MemoryStore::new();
//! store.add_sensor(Sensor::new("Front Door", SensorKind::Door));
//! store.set_arming_status(ArmingStatus::ArmedAway);
//!
//! assert_eq!(store.sensors().len(), 1);
//! ```

mod file;
mod memory;

use std::collections::HashSet;

use crate::types::{AlarmStatus, ArmingStatus, Sensor};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Authoritative storage for the security system's status.
///
/// Implementations own the current [`AlarmStatus`], [`ArmingStatus`], and
/// sensor set. All methods are infallible; membership of sensor mutations
/// is reported through `bool` returns so callers can surface a not-found
/// condition themselves.
pub trait StatusStore {
    /// Returns the current alarm status.
    fn alarm_status(&self) -> AlarmStatus;

    /// Sets the alarm status.
    fn set_alarm_status(&mut self, status: AlarmStatus);

    /// Returns the current arming status.
    fn arming_status(&self) -> ArmingStatus;

    /// Sets the arming status.
    fn set_arming_status(&mut self, status: ArmingStatus);

    /// Returns the current sensor set.
    fn sensors(&self) -> HashSet<Sensor>;

    /// Adds a sensor to the set.
    ///
    /// Adding a sensor that is already present (by name and kind) leaves
    /// the stored sensor untouched.
    fn add_sensor(&mut self, sensor: Sensor);

    /// Removes a sensor from the set.
    ///
    /// Returns `true` if the sensor was present.
    fn remove_sensor(&mut self, sensor: &Sensor) -> bool;

    /// Replaces a stored sensor with the given value.
    ///
    /// The sensor to replace is located by identity (name and kind).
    /// Returns `false` if no such sensor is stored.
    fn update_sensor(&mut self, sensor: Sensor) -> bool;
}
