// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alarm status type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The system's current alert level.
///
/// The alarm status is mutated only by the
/// [`SecurityMonitor`](crate::monitor::SecurityMonitor); callers observe it
/// but never write it directly.
///
/// # Examples
///
/// ```
/// use vigil_lib::types::AlarmStatus;
///
/// let status = AlarmStatus::PendingAlarm;
/// assert_eq!(status.as_str(), "PENDING_ALARM");
/// assert!(!status.is_raised());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum AlarmStatus {
    /// Nothing to report.
    #[default]
    NoAlarm,
    /// A sensor tripped while armed; the alarm will raise on the next trip.
    PendingAlarm,
    /// The alarm is raised.
    Alarm,
}

impl AlarmStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoAlarm => "NO_ALARM",
            Self::PendingAlarm => "PENDING_ALARM",
            Self::Alarm => "ALARM",
        }
    }

    /// Returns a short human-readable description suitable for display.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NoAlarm => "Cool and Good",
            Self::PendingAlarm => "I'm in Danger...",
            Self::Alarm => "Awooga!",
        }
    }

    /// Returns `true` if the alarm is currently raised.
    #[must_use]
    pub const fn is_raised(&self) -> bool {
        matches!(self, Self::Alarm)
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlarmStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NO_ALARM" => Ok(Self::NoAlarm),
            "PENDING_ALARM" => Ok(Self::PendingAlarm),
            "ALARM" => Ok(Self::Alarm),
            _ => Err(ValueError::InvalidAlarmStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str() {
        assert_eq!(AlarmStatus::NoAlarm.as_str(), "NO_ALARM");
        assert_eq!(AlarmStatus::PendingAlarm.as_str(), "PENDING_ALARM");
        assert_eq!(AlarmStatus::Alarm.as_str(), "ALARM");
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "NO_ALARM".parse::<AlarmStatus>().unwrap(),
            AlarmStatus::NoAlarm
        );
        assert_eq!(
            "pending_alarm".parse::<AlarmStatus>().unwrap(),
            AlarmStatus::PendingAlarm
        );
        assert_eq!("alarm".parse::<AlarmStatus>().unwrap(), AlarmStatus::Alarm);
    }

    #[test]
    fn from_str_invalid() {
        let result = "sirens".parse::<AlarmStatus>();
        assert!(matches!(
            result.unwrap_err(),
            ValueError::InvalidAlarmStatus(_)
        ));
    }

    #[test]
    fn default_is_no_alarm() {
        assert_eq!(AlarmStatus::default(), AlarmStatus::NoAlarm);
    }

    #[test]
    fn is_raised() {
        assert!(AlarmStatus::Alarm.is_raised());
        assert!(!AlarmStatus::PendingAlarm.is_raised());
        assert!(!AlarmStatus::NoAlarm.is_raised());
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&AlarmStatus::PendingAlarm).unwrap();
        let status: AlarmStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, AlarmStatus::PendingAlarm);
    }
}
