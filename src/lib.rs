// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Vigil` Lib - A Rust library simulating a home security system.
//!
//! This library provides the core of an educational security-system
//! simulator: sensors report activation state, a monitor aggregates them
//! into an alarm status, and a stub image classifier decides whether a
//! camera frame contains a cat while the system is armed-home.
//!
//! # Supported Features
//!
//! - **Alarm rules**: Sensor trips escalate `NoAlarm` to `PendingAlarm` to
//!   `Alarm` while armed; disarming clears
//! - **Sensor management**: Door, window, and motion sensors, added and
//!   removed at runtime
//! - **Camera verdicts**: A stub classifier answers the single question the
//!   rules need - "is there a cat in this frame?"
//! - **Status subscriptions**: Callback subscriptions and a broadcast event
//!   bus for front ends to repaint from
//! - **Persistence**: An in-memory store and a JSON-file-backed store
//!
//! # Quick Start
//!
//! ## Driving the monitor
//!
//! ```
//! use vigil_lib::store::MemoryStore;
//! use vigil_lib::image::StubClassifier;
//! use vigil_lib::types::{AlarmStatus, ArmingStatus, Sensor, SensorKind};
//! use vigil_lib::SecurityMonitor;
//!
//! fn main() -> vigil_lib::Result<()> {
//!     let mut monitor = SecurityMonitor::new(MemoryStore::new(), StubClassifier::new());
//!
//!     let front_door = Sensor::new("Front Door", SensorKind::Door);
//!     monitor.add_sensor(front_door.clone());
//!     monitor.set_arming_status(ArmingStatus::ArmedAway);
//!
//!     // The door opens
//!     monitor.set_sensor_active(&front_door, true)?;
//!     assert_eq!(monitor.alarm_status(), AlarmStatus::PendingAlarm);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Observing status changes
//!
//! ```
//! use vigil_lib::store::MemoryStore;
//! use vigil_lib::image::StubClassifier;
//! use vigil_lib::subscription::Observable;
//! use vigil_lib::SecurityMonitor;
//!
//! let monitor = SecurityMonitor::new(MemoryStore::new(), StubClassifier::new());
//!
//! // Callback subscriptions, one per panel to repaint
//! monitor.on_alarm_changed(|status| {
//!     println!("Alarm is now {status}");
//! });
//! monitor.on_cat_detected(|detected| {
//!     println!("Cat in frame: {detected}");
//! });
//!
//! // Or tap the event bus for everything at once
//! let mut events = monitor.subscribe();
//! ```
//!
//! ## Persisting across runs
//!
//! ```no_run
//! use vigil_lib::store::FileStore;
//! use vigil_lib::image::StubClassifier;
//! use vigil_lib::SecurityMonitor;
//!
//! // Status and sensors are reloaded from the snapshot on the next run
//! let store = FileStore::open("security-state.json");
//! let monitor = SecurityMonitor::new(store, StubClassifier::new());
//! ```

pub mod error;
pub mod event;
pub mod image;
pub mod monitor;
pub mod store;
pub mod subscription;
pub mod types;

pub use error::{Error, ImageError, Result, StoreError, ValueError};
pub use event::{EventBus, SecurityEvent};
pub use image::{CameraImage, ImageClassifier, StubClassifier};
pub use monitor::{MonitorConfig, SecurityMonitor};
pub use store::{FileStore, MemoryStore, StatusStore};
pub use subscription::{Observable, SubscriptionId};
pub use types::{AlarmStatus, ArmingStatus, Sensor, SensorId, SensorKind};
