// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for security status changes.
//!
//! This module provides a callback-based subscription system for receiving
//! notifications when the alarm status transitions, a camera frame is
//! classified, or the sensor set changes. It is the surface a desktop
//! front end hooks into to repaint its panels.
//!
//! # Overview
//!
//! The subscription system consists of:
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription, used to unsubscribe
//! - [`CallbackRegistry`] - Internal registry that manages callbacks and dispatches events
//! - [`Observable`] - Trait for types that support status subscriptions
//!
//! # Usage
//!
//! Subscriptions are created through methods on the monitor:
//!
//! ```
//! use vigil_lib::SecurityMonitor;
//! use vigil_lib::image::StubClassifier;
//! use vigil_lib::store::MemoryStore;
//! use vigil_lib::subscription::Observable;
//!
//! let monitor = SecurityMonitor::new(MemoryStore::new(), StubClassifier::new());
//!
//! // Subscribe to alarm transitions
//! let sub_id = monitor.on_alarm_changed(|status| {
//!     println!("Alarm status: {status}");
//! });
//!
//! // Later, unsubscribe
//! monitor.unsubscribe(sub_id);
//! ```

mod callback;
mod observer;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use observer::Observable;
