// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sensor types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use uuid::Uuid;

use crate::error::ValueError;

/// Unique identifier for a sensor.
///
/// This is a wrapper around UUID v4 that provides a distinct type for
/// sensor identification, preventing accidental confusion with other
/// UUID-based identifiers. The identifier is for display and correlation
/// only; sensor equality is defined by name and kind.
///
/// # Examples
///
/// ```
/// use vigil_lib::types::SensorId;
///
/// let id = SensorId::new();
/// println!("Sensor: {}", id);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SensorId(Uuid);

impl SensorId {
    /// Creates a new unique sensor identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a sensor identifier from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SensorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show only first 8 characters for readability
        let short = &self.0.to_string()[..8];
        write!(f, "SensorId({short}...)")
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SensorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<SensorId> for Uuid {
    fn from(id: SensorId) -> Self {
        id.0
    }
}

/// The physical kind of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SensorKind {
    /// Door contact sensor.
    Door,
    /// Window contact sensor.
    Window,
    /// Motion detector.
    Motion,
}

impl SensorKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Door => "DOOR",
            Self::Window => "WINDOW",
            Self::Motion => "MOTION",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DOOR" => Ok(Self::Door),
            "WINDOW" => Ok(Self::Window),
            "MOTION" => Ok(Self::Motion),
            _ => Err(ValueError::InvalidSensorKind(s.to_string())),
        }
    }
}

/// A binary activation source: a door or window contact, or a motion
/// detector.
///
/// Sensors compare equal when their name and kind match; the UUID and the
/// active flag do not participate in equality or hashing. This makes a
/// caller-held `Sensor` value a valid lookup key for the store even when
/// the stored activation flag has drifted.
///
/// # Examples
///
/// ```
/// use vigil_lib::types::{Sensor, SensorKind};
///
/// let sensor = Sensor::new("Front Door", SensorKind::Door);
/// assert_eq!(sensor.name(), "Front Door");
/// assert!(!sensor.is_active());
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Sensor {
    id: SensorId,
    name: String,
    kind: SensorKind,
    active: bool,
}

impl Sensor {
    /// Creates a new inactive sensor with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SensorKind) -> Self {
        Self {
            id: SensorId::new(),
            name: name.into(),
            kind,
            active: false,
        }
    }

    /// Returns the sensor's identifier.
    #[must_use]
    pub fn id(&self) -> SensorId {
        self.id
    }

    /// Returns the sensor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sensor's kind.
    #[must_use]
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Returns `true` if the sensor currently reports activation.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Sets the sensor's activation flag.
    ///
    /// This only mutates the local value; routing the change through the
    /// alarm rules is the monitor's job.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
