// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for the security system.
//!
//! This module provides the data model shared by the monitor, the stores,
//! and the event system.
//!
//! # Types
//!
//! - [`AlarmStatus`] - The system's current alert level
//! - [`ArmingStatus`] - The user-selected arming mode
//! - [`Sensor`] - A binary activation source (door/window/motion)
//! - [`SensorKind`] - The physical kind of a sensor
//! - [`SensorId`] - Unique identifier for a sensor

mod alarm_status;
mod arming_status;
mod sensor;

pub use alarm_status::AlarmStatus;
pub use arming_status::ArmingStatus;
pub use sensor::{Sensor, SensorId, SensorKind};
