// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for security status subscriptions.
//!
//! This module provides the core types for managing subscription callbacks:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Internal registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::types::AlarmStatus;

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within a monitor's lifetime.
///
/// # Examples
///
/// ```ignore
/// let sub_id = monitor.on_alarm_changed(|status| { /* ... */ });
///
/// // Later, unsubscribe
/// monitor.unsubscribe(sub_id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for alarm status callbacks.
type AlarmCallback = Arc<dyn Fn(AlarmStatus) + Send + Sync>;

/// Type alias for cat detection callbacks.
type CatDetectedCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Type alias for sensor-set change callbacks.
type SensorsChangedCallback = Arc<dyn Fn() + Send + Sync>;

/// Registry for managing security status subscription callbacks.
///
/// This is an internal type used by the monitor to store and dispatch
/// callbacks. It uses thread-safe interior mutability via
/// `parking_lot::RwLock` so subscriptions can be created through a shared
/// reference while the monitor itself stays single-threaded.
///
/// # Thread Safety
///
/// The registry is fully thread-safe. Callbacks are wrapped in `Arc` so
/// they can be cloned cheaply.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Alarm status transition callbacks.
    alarm_callbacks: RwLock<HashMap<SubscriptionId, AlarmCallback>>,
    /// Cat detection verdict callbacks.
    cat_callbacks: RwLock<HashMap<SubscriptionId, CatDetectedCallback>>,
    /// Sensor-set change callbacks.
    sensors_callbacks: RwLock<HashMap<SubscriptionId, SensorsChangedCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            alarm_callbacks: RwLock::new(HashMap::new()),
            cat_callbacks: RwLock::new(HashMap::new()),
            sensors_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for alarm status transitions.
    ///
    /// The callback receives the new alarm status.
    pub fn on_alarm_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AlarmStatus) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.alarm_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for camera classification verdicts.
    ///
    /// The callback receives `true` when a cat was detected.
    pub fn on_cat_detected<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.cat_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for sensor-set changes.
    ///
    /// The callback fires when a sensor is added or removed, or when any
    /// sensor's activation flag changes.
    pub fn on_sensors_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.sensors_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        // Try each callback map until we find and remove the ID
        if self.alarm_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.cat_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.sensors_callbacks.write().remove(&id).is_some() {
            return true;
        }
        false
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.alarm_callbacks.write().clear();
        self.cat_callbacks.write().clear();
        self.sensors_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches an alarm status transition to subscribers.
    ///
    /// Callbacks are called synchronously in an arbitrary order.
    pub fn dispatch_alarm(&self, status: AlarmStatus) {
        let callbacks = self.alarm_callbacks.read();
        for callback in callbacks.values() {
            callback(status);
        }
    }

    /// Dispatches a camera classification verdict to subscribers.
    pub fn dispatch_cat_detected(&self, detected: bool) {
        let callbacks = self.cat_callbacks.read();
        for callback in callbacks.values() {
            callback(detected);
        }
    }

    /// Dispatches a sensor-set change to subscribers.
    pub fn dispatch_sensors_changed(&self) {
        let callbacks = self.sensors_callbacks.read();
        for callback in callbacks.values() {
            callback();
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.alarm_callbacks.read().len()
            + self.cat_callbacks.read().len()
            + self.sensors_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
