// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security event types.

use crate::types::{AlarmStatus, ArmingStatus, Sensor};

/// Events emitted by the security monitor.
///
/// These events notify subscribers about arming and alarm transitions,
/// camera classification verdicts, and changes to the sensor set. Events
/// that concern a single sensor carry the sensor's post-change value.
///
/// # Examples
///
/// ```
/// use vigil_lib::event::SecurityEvent;
/// use vigil_lib::types::{AlarmStatus, ArmingStatus};
///
/// let armed = SecurityEvent::arming_changed(ArmingStatus::ArmedAway);
/// let raised = SecurityEvent::alarm_changed(AlarmStatus::Alarm);
///
/// assert!(raised.is_alarm());
/// assert!(!armed.is_alarm());
/// ```
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum SecurityEvent {
    /// The arming status was changed by the user.
    ArmingChanged {
        /// The new arming status.
        status: ArmingStatus,
    },

    /// The alarm status transitioned.
    AlarmChanged {
        /// The new alarm status.
        status: AlarmStatus,
    },

    /// The camera frame was classified.
    CatDetected {
        /// Whether a cat was found in the frame.
        detected: bool,
    },

    /// A sensor was added to the store.
    SensorAdded {
        /// The added sensor.
        sensor: Sensor,
    },

    /// A sensor was removed from the store.
    SensorRemoved {
        /// The removed sensor.
        sensor: Sensor,
    },

    /// A sensor's activation flag changed.
    SensorStateChanged {
        /// The sensor after the change.
        sensor: Sensor,
    },
}

impl SecurityEvent {
    /// Creates an arming changed event.
    #[must_use]
    pub fn arming_changed(status: ArmingStatus) -> Self {
        Self::ArmingChanged { status }
    }

    /// Creates an alarm changed event.
    #[must_use]
    pub fn alarm_changed(status: AlarmStatus) -> Self {
        Self::AlarmChanged { status }
    }

    /// Creates a cat detection event.
    #[must_use]
    pub fn cat_detected(detected: bool) -> Self {
        Self::CatDetected { detected }
    }

    /// Creates a sensor added event.
    #[must_use]
    pub fn sensor_added(sensor: Sensor) -> Self {
        Self::SensorAdded { sensor }
    }

    /// Creates a sensor removed event.
    #[must_use]
    pub fn sensor_removed(sensor: Sensor) -> Self {
        Self::SensorRemoved { sensor }
    }

    /// Creates a sensor state changed event.
    #[must_use]
    pub fn sensor_state_changed(sensor: Sensor) -> Self {
        Self::SensorStateChanged { sensor }
    }

    /// Returns `true` if this is an alarm status transition.
    #[must_use]
    pub fn is_alarm(&self) -> bool {
        matches!(self, Self::AlarmChanged { .. })
    }

    /// Returns `true` if this event concerns the sensor set
    /// (added/removed/state change).
    #[must_use]
    pub fn is_sensor(&self) -> bool {
        matches!(
            self,
            Self::SensorAdded { .. } | Self::SensorRemoved { .. } | Self::SensorStateChanged { .. }
        )
    }

    /// Returns `true` if this is a camera classification verdict.
    #[must_use]
    pub fn is_detection(&self) -> bool {
        matches!(self, Self::CatDetected { .. })
    }

    /// Returns the sensor this event concerns, if any.
    #[must_use]
    pub fn sensor(&self) -> Option<&Sensor> {
        match self {
            Self::SensorAdded { sensor }
            | Self::SensorRemoved { sensor }
            | Self::SensorStateChanged { sensor } => Some(sensor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SensorKind;

    #[test]
    fn alarm_events() {
        let event = SecurityEvent::alarm_changed(AlarmStatus::PendingAlarm);
        assert!(event.is_alarm());
        assert!(!event.is_sensor());
        assert!(!event.is_detection());
    }

    #[test]
    fn sensor_events() {
        let sensor = Sensor::new("Front Door", SensorKind::Door);

        assert!(SecurityEvent::sensor_added(sensor.clone()).is_sensor());
        assert!(SecurityEvent::sensor_removed(sensor.clone()).is_sensor());
        assert!(SecurityEvent::sensor_state_changed(sensor).is_sensor());
        assert!(!SecurityEvent::cat_detected(true).is_sensor());
    }

    #[test]
    fn detection_events() {
        assert!(SecurityEvent::cat_detected(false).is_detection());
        assert!(!SecurityEvent::arming_changed(ArmingStatus::Disarmed).is_detection());
    }

    #[test]
    fn sensor_extraction() {
        let sensor = Sensor::new("Hallway", SensorKind::Motion);
        let event = SecurityEvent::sensor_state_changed(sensor.clone());
        assert_eq!(event.sensor(), Some(&sensor));

        let event = SecurityEvent::alarm_changed(AlarmStatus::NoAlarm);
        assert!(event.sensor().is_none());
    }
}
