// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arming status type.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// User-selected mode determining whether sensor events can raise an alarm.
///
/// # Examples
///
/// ```
/// use vigil_lib::types::ArmingStatus;
///
/// assert!(ArmingStatus::ArmedAway.is_armed());
/// assert!(!ArmingStatus::Disarmed.is_armed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum ArmingStatus {
    /// Sensor events are ignored by the alarm rules.
    #[default]
    Disarmed,
    /// Armed with occupants at home; camera cat detection is live.
    ArmedHome,
    /// Armed with the home empty.
    ArmedAway,
}

impl ArmingStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disarmed => "DISARMED",
            Self::ArmedHome => "ARMED_HOME",
            Self::ArmedAway => "ARMED_AWAY",
        }
    }

    /// Returns `true` if the system is armed in any mode.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self, Self::ArmedHome | Self::ArmedAway)
    }
}

impl fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArmingStatus {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DISARMED" => Ok(Self::Disarmed),
            "ARMED_HOME" => Ok(Self::ArmedHome),
            "ARMED_AWAY" => Ok(Self::ArmedAway),
            _ => Err(ValueError::InvalidArmingStatus(s.to_string())),
        }
    }
}
