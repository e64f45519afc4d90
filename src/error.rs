// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Vigil` library.
//!
//! This module provides the error hierarchy for handling failures across the
//! library: status-store persistence, image classification, and monitor
//! operations.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when driving
/// the security monitor.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred in the status store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Error occurred during image classification.
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// Sensor was not found in the store.
    #[error("sensor not found")]
    SensorNotFound,
}

/// Errors related to value validation and constraints.
///
/// These errors occur when parsing status values from their string
/// representations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An invalid alarm status string was provided.
    #[error("invalid alarm status: {0}")]
    InvalidAlarmStatus(String),

    /// An invalid arming status string was provided.
    #[error("invalid arming status: {0}")]
    InvalidArmingStatus(String),

    /// An invalid sensor kind string was provided.
    #[error("invalid sensor kind: {0}")]
    InvalidSensorKind(String),
}

/// Errors related to persisting and restoring status-store snapshots.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the snapshot failed.
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors related to image classification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The camera frame carried no pixel data.
    #[error("empty camera frame")]
    EmptyFrame,

    /// The classifier backend reported a failure.
    #[error("classifier backend error: {0}")]
    Backend(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
