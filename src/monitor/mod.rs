// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Security monitor: the alarm rule engine.
//!
//! The [`SecurityMonitor`] composes a [`StatusStore`] and an
//! [`ImageClassifier`] and owns every alarm status transition. Sensor
//! activations, arming changes, and camera verdicts all flow through it;
//! nothing else in the system writes the alarm status.

mod config;

use std::collections::HashSet;

use tokio::sync::broadcast;

use crate::error::{Error, Result};
use crate::event::{EventBus, SecurityEvent};
use crate::image::{CameraImage, ImageClassifier};
use crate::store::StatusStore;
use crate::subscription::{CallbackRegistry, Observable, SubscriptionId};
use crate::types::{AlarmStatus, ArmingStatus, Sensor};

pub use config::MonitorConfig;

/// The alarm rule engine of the security system.
///
/// The monitor evaluates a flat rule table on every sensor change, arming
/// change, and processed camera frame; it holds no state machine object of
/// its own. The injected store owns the authoritative status values.
///
/// # Rules
///
/// - A sensor activating while armed escalates `NoAlarm` to `PendingAlarm`
///   and `PendingAlarm` to `Alarm`. Re-activating an already-active sensor
///   during `PendingAlarm` counts as a fresh trip and escalates too.
/// - A sensor deactivating during `PendingAlarm` drops back to `NoAlarm`
///   once no sensor remains active.
/// - Once raised, the alarm is never downgraded by sensor traffic alone;
///   the one exception is a sensor change while disarmed, which drops
///   `Alarm` to `PendingAlarm`.
/// - Disarming always clears to `NoAlarm`; arming wipes every sensor's
///   activation flag.
/// - A cat in the camera frame while armed-home raises the alarm; a
///   cat-free frame clears to `NoAlarm` when no sensor is active.
///
/// # Examples
///
/// ```
/// use vigil_lib::image::StubClassifier;
/// use vigil_lib::store::MemoryStore;
/// use vigil_lib::types::{AlarmStatus, ArmingStatus, Sensor, SensorKind};
/// use vigil_lib::SecurityMonitor;
///
/// let mut monitor = SecurityMonitor::new(MemoryStore::new(), StubClassifier::new());
///
/// let sensor = Sensor::new("Front Door", SensorKind::Door);
/// monitor.add_sensor(sensor.clone());
/// monitor.set_arming_status(ArmingStatus::ArmedAway);
///
/// monitor.set_sensor_active(&sensor, true)?;
/// assert_eq!(monitor.alarm_status(), AlarmStatus::PendingAlarm);
/// # Ok::<(), vigil_lib::Error>(())
/// ```
#[derive(Debug)]
pub struct SecurityMonitor<S, C> {
    /// Authoritative status storage.
    store: S,
    /// Camera frame classifier.
    classifier: C,
    /// Monitor configuration.
    config: MonitorConfig,
    /// Status subscription callbacks.
    callbacks: CallbackRegistry,
    /// Event bus for broadcasting security events.
    event_bus: EventBus,
}

impl<S, C> SecurityMonitor<S, C>
where
    S: StatusStore,
    C: ImageClassifier,
{
    /// Creates a monitor with the default configuration.
    #[must_use]
    pub fn new(store: S, classifier: C) -> Self {
        Self::with_config(store, classifier, MonitorConfig::default())
    }

    /// Creates a monitor with the given configuration.
    #[must_use]
    pub fn with_config(store: S, classifier: C, config: MonitorConfig) -> Self {
        Self {
            store,
            classifier,
            event_bus: EventBus::with_capacity(config.event_capacity()),
            callbacks: CallbackRegistry::new(),
            config,
        }
    }

    // =========================================================================
    // Status access
    // =========================================================================

    /// Returns the current alarm status.
    #[must_use]
    pub fn alarm_status(&self) -> AlarmStatus {
        self.store.alarm_status()
    }

    /// Returns the current arming status.
    #[must_use]
    pub fn arming_status(&self) -> ArmingStatus {
        self.store.arming_status()
    }

    /// Returns the current sensor set.
    #[must_use]
    pub fn sensors(&self) -> HashSet<Sensor> {
        self.store.sensors()
    }

    /// Returns the monitor configuration.
    #[must_use]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Returns a reference to the injected store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Subscribes to security events.
    ///
    /// Returns a receiver that will receive all events published after the
    /// subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SecurityEvent> {
        self.event_bus.subscribe()
    }

    // =========================================================================
    // Arming
    // =========================================================================

    /// Sets the arming status.
    ///
    /// Disarming always clears the alarm to [`AlarmStatus::NoAlarm`].
    /// Arming (home or away) resets every sensor's activation flag to
    /// `false` so stale activations cannot trip the fresh arming period.
    pub fn set_arming_status(&mut self, status: ArmingStatus) {
        tracing::info!(status = %status, "Setting arming status");

        if status == ArmingStatus::Disarmed {
            self.write_alarm_status(AlarmStatus::NoAlarm);
        } else {
            self.reset_sensors();
        }

        self.store.set_arming_status(status);
        self.event_bus.publish(SecurityEvent::arming_changed(status));
    }

    /// Wipes every sensor's activation flag.
    fn reset_sensors(&mut self) {
        let mut any_reset = false;
        for mut sensor in self.store.sensors() {
            if sensor.is_active() {
                sensor.set_active(false);
                self.store.update_sensor(sensor.clone());
                self.event_bus
                    .publish(SecurityEvent::sensor_state_changed(sensor));
                any_reset = true;
            }
        }
        if any_reset {
            self.callbacks.dispatch_sensors_changed();
        }
    }

    // =========================================================================
    // Sensors
    // =========================================================================

    /// Adds a sensor to the store.
    pub fn add_sensor(&mut self, sensor: Sensor) {
        tracing::debug!(sensor = %sensor, "Adding sensor");
        self.store.add_sensor(sensor.clone());
        self.callbacks.dispatch_sensors_changed();
        self.event_bus.publish(SecurityEvent::sensor_added(sensor));
    }

    /// Removes a sensor from the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SensorNotFound`] if the sensor is not in the store.
    pub fn remove_sensor(&mut self, sensor: &Sensor) -> Result<()> {
        tracing::debug!(sensor = %sensor, "Removing sensor");
        if !self.store.remove_sensor(sensor) {
            return Err(Error::SensorNotFound);
        }
        self.callbacks.dispatch_sensors_changed();
        self.event_bus
            .publish(SecurityEvent::sensor_removed(sensor.clone()));
        Ok(())
    }

    /// Changes a sensor's activation flag and evaluates the alarm rules.
    ///
    /// The stored flag is updated in every case. The rule table only runs
    /// when the change has an effect: deactivating an already-inactive
    /// sensor never writes the alarm status, and activating an
    /// already-active sensor writes it only while the system is
    /// [`AlarmStatus::PendingAlarm`] (a repeat trip escalates).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SensorNotFound`] if the sensor is not in the store.
    pub fn set_sensor_active(&mut self, sensor: &Sensor, active: bool) -> Result<()> {
        let sensors = self.store.sensors();
        let stored = sensors.get(sensor).ok_or(Error::SensorNotFound)?;
        let was_active = stored.is_active();

        let mut updated = stored.clone();
        updated.set_active(active);
        self.store.update_sensor(updated.clone());

        tracing::debug!(
            sensor = %updated,
            was_active,
            active,
            "Sensor activation change"
        );

        if active && !was_active {
            self.on_sensor_activated();
        } else if !active && was_active {
            self.on_sensor_deactivated();
        } else if active && self.store.alarm_status() == AlarmStatus::PendingAlarm {
            // Already active, tripped again: treat as a fresh activation
            self.on_sensor_activated();
        }

        self.callbacks.dispatch_sensors_changed();
        self.event_bus
            .publish(SecurityEvent::sensor_state_changed(updated));
        Ok(())
    }

    /// Rule-table branch for a sensor activation.
    fn on_sensor_activated(&mut self) {
        let arming = self.store.arming_status();
        match self.store.alarm_status() {
            AlarmStatus::NoAlarm => {
                if arming.is_armed() {
                    self.write_alarm_status(AlarmStatus::PendingAlarm);
                }
            }
            AlarmStatus::PendingAlarm => {
                if arming.is_armed() {
                    self.write_alarm_status(AlarmStatus::Alarm);
                }
            }
            AlarmStatus::Alarm => {
                if arming == ArmingStatus::Disarmed {
                    self.write_alarm_status(AlarmStatus::PendingAlarm);
                }
            }
        }
    }

    /// Rule-table branch for a sensor deactivation.
    fn on_sensor_deactivated(&mut self) {
        match self.store.alarm_status() {
            AlarmStatus::PendingAlarm => {
                if !self.any_sensor_active() {
                    self.write_alarm_status(AlarmStatus::NoAlarm);
                }
            }
            AlarmStatus::Alarm => {
                if self.store.arming_status() == ArmingStatus::Disarmed {
                    self.write_alarm_status(AlarmStatus::PendingAlarm);
                }
            }
            AlarmStatus::NoAlarm => {}
        }
    }

    /// Returns `true` if any stored sensor reports activation.
    fn any_sensor_active(&self) -> bool {
        self.store.sensors().iter().any(Sensor::is_active)
    }

    // =========================================================================
    // Camera
    // =========================================================================

    /// Classifies a camera frame and evaluates the alarm rules.
    ///
    /// A cat while armed-home raises the alarm; a cat-free frame clears to
    /// [`AlarmStatus::NoAlarm`] when no sensor is active. The verdict is
    /// dispatched to cat-detection subscribers either way.
    ///
    /// # Errors
    ///
    /// Propagates classifier failures without touching any state.
    pub fn process_image(&mut self, image: &CameraImage) -> Result<()> {
        let cat = self
            .classifier
            .contains_cat(image, self.config.confidence_threshold())?;

        tracing::debug!(cat, "Processed camera frame");

        if cat && self.store.arming_status() == ArmingStatus::ArmedHome {
            self.write_alarm_status(AlarmStatus::Alarm);
        } else if !cat && !self.any_sensor_active() {
            self.write_alarm_status(AlarmStatus::NoAlarm);
        }

        self.callbacks.dispatch_cat_detected(cat);
        self.event_bus.publish(SecurityEvent::cat_detected(cat));
        Ok(())
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Writes the alarm status and notifies subscribers.
    fn write_alarm_status(&mut self, status: AlarmStatus) {
        tracing::info!(status = %status, "Alarm status transition");
        self.store.set_alarm_status(status);
        self.callbacks.dispatch_alarm(status);
        self.event_bus.publish(SecurityEvent::alarm_changed(status));
    }
}

impl<S, C> Observable for SecurityMonitor<S, C> {
    fn on_alarm_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AlarmStatus) + Send + Sync + 'static,
    {
        self.callbacks.on_alarm_changed(callback)
    }

    fn on_cat_detected<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks.on_cat_detected(callback)
    }

    fn on_sensors_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.on_sensors_changed(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}
