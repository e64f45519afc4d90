// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observable trait for types that expose status subscriptions.

use crate::subscription::SubscriptionId;
use crate::types::AlarmStatus;

/// Trait for types that support status subscriptions.
///
/// This trait provides methods to subscribe to the three observable
/// surfaces of the security system: alarm transitions, camera
/// classification verdicts, and sensor-set changes. A desktop front end
/// registers one callback per panel it needs to repaint.
///
/// # Examples
///
/// ```
/// use vigil_lib::subscription::Observable;
/// use vigil_lib::store::MemoryStore;
/// use vigil_lib::image::StubClassifier;
/// use vigil_lib::SecurityMonitor;
///
/// let monitor = SecurityMonitor::new(MemoryStore::new(), StubClassifier::new());
///
/// // Subscribe to alarm transitions
/// let sub_id = monitor.on_alarm_changed(|status| {
///     println!("Alarm is now {status}");
/// });
///
/// // Unsubscribe when no longer needed
/// monitor.unsubscribe(sub_id);
/// ```
pub trait Observable {
    /// Subscribes to alarm status transitions.
    ///
    /// The callback is called with the new status whenever the monitor
    /// writes the alarm status.
    fn on_alarm_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AlarmStatus) + Send + Sync + 'static;

    /// Subscribes to camera classification verdicts.
    ///
    /// The callback is called after every processed frame with `true`
    /// when a cat was detected.
    fn on_cat_detected<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static;

    /// Subscribes to sensor-set changes.
    ///
    /// The callback is called when a sensor is added or removed, or when
    /// any sensor's activation flag changes.
    fn on_sensors_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
