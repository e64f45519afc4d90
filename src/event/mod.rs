// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for security status changes.
//!
//! This module provides a pub/sub event system for notifying subscribers
//! about arming, alarm, sensor, and camera classification changes. The
//! [`EventBus`] uses tokio's broadcast channel to allow multiple subscribers
//! to receive events.
//!
//! # Examples
//!
//! ```
//! use vigil_lib::event::{EventBus, SecurityEvent};
//! use vigil_lib::types::ArmingStatus;
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to events
//! let mut rx = bus.subscribe();
//!
//! // Publish an event
//! bus.publish(SecurityEvent::arming_changed(ArmingStatus::ArmedAway));
//! ```

mod event_bus;
mod security_event;

pub use event_bus::EventBus;
pub use security_event::SecurityEvent;
