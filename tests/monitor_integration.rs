// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the security monitor's alarm rules and
//! notification surfaces.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use vigil_lib::image::{CameraImage, ImageClassifier};
use vigil_lib::store::{MemoryStore, StatusStore};
use vigil_lib::subscription::Observable;
use vigil_lib::types::{AlarmStatus, ArmingStatus, Sensor, SensorKind};
use vigil_lib::{ImageError, SecurityEvent, SecurityMonitor};

/// Classifier double with a scripted verdict.
struct FixedClassifier(bool);

impl ImageClassifier for FixedClassifier {
    fn contains_cat(&self, _image: &CameraImage, _threshold: f32) -> Result<bool, ImageError> {
        Ok(self.0)
    }
}

fn monitor(cat: bool) -> SecurityMonitor<MemoryStore, FixedClassifier> {
    SecurityMonitor::new(MemoryStore::new(), FixedClassifier(cat))
}

fn frame() -> CameraImage {
    CameraImage::blank(64, 64)
}

// ============================================================================
// Alarm Rule Tests
// ============================================================================

mod alarm_rules {
    use super::*;

    #[test]
    fn full_break_in_sequence() {
        let mut monitor = monitor(false);
        let door = Sensor::new("Front Door", SensorKind::Door);
        let window = Sensor::new("Kitchen Window", SensorKind::Window);
        monitor.add_sensor(door.clone());
        monitor.add_sensor(window.clone());

        monitor.set_arming_status(ArmingStatus::ArmedAway);
        assert_eq!(monitor.alarm_status(), AlarmStatus::NoAlarm);

        monitor.set_sensor_active(&door, true).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::PendingAlarm);

        monitor.set_sensor_active(&window, true).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::Alarm);

        // Sensors calming down does not silence a raised alarm
        monitor.set_sensor_active(&door, false).unwrap();
        monitor.set_sensor_active(&window, false).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::Alarm);

        // Only disarming does
        monitor.set_arming_status(ArmingStatus::Disarmed);
        assert_eq!(monitor.alarm_status(), AlarmStatus::NoAlarm);
    }

    #[test]
    fn false_alarm_resolves_itself() {
        let mut monitor = monitor(false);
        let hallway = Sensor::new("Hallway", SensorKind::Motion);
        monitor.add_sensor(hallway.clone());
        monitor.set_arming_status(ArmingStatus::ArmedHome);

        // The dog walks by, then leaves
        monitor.set_sensor_active(&hallway, true).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::PendingAlarm);

        monitor.set_sensor_active(&hallway, false).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::NoAlarm);
    }

    #[test]
    fn arming_wipes_stale_activations() {
        let mut monitor = monitor(false);
        let sensors: Vec<Sensor> = (0..3)
            .map(|i| {
                let s = Sensor::new(format!("Sensor {i}"), SensorKind::Window);
                monitor.add_sensor(s.clone());
                s
            })
            .collect();

        monitor.set_arming_status(ArmingStatus::ArmedAway);
        for sensor in &sensors {
            monitor.set_sensor_active(sensor, true).unwrap();
        }
        assert!(monitor.sensors().iter().any(Sensor::is_active));

        monitor.set_arming_status(ArmingStatus::ArmedHome);

        assert_eq!(monitor.sensors().len(), 3);
        for sensor in monitor.sensors() {
            assert!(!sensor.is_active(), "{sensor} still active after arming");
        }
    }

    #[test]
    fn cat_raises_alarm_only_at_home() {
        let mut monitor = monitor(true);
        monitor.set_arming_status(ArmingStatus::ArmedAway);
        monitor.process_image(&frame()).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::NoAlarm);

        monitor.set_arming_status(ArmingStatus::ArmedHome);
        monitor.process_image(&frame()).unwrap();
        assert_eq!(monitor.alarm_status(), AlarmStatus::Alarm);
    }

    #[test]
    fn cat_free_frame_clears_when_sensors_idle() {
        let mut store = MemoryStore::new();
        store.set_arming_status(ArmingStatus::ArmedHome);
        store.set_alarm_status(AlarmStatus::Alarm);

        let mut monitor = SecurityMonitor::new(store, FixedClassifier(false));
        monitor.process_image(&frame()).unwrap();

        assert_eq!(monitor.alarm_status(), AlarmStatus::NoAlarm);
    }

    #[test]
    fn cat_free_frame_respects_active_sensors() {
        let mut store = MemoryStore::new();
        store.set_arming_status(ArmingStatus::ArmedHome);
        store.set_alarm_status(AlarmStatus::PendingAlarm);
        let mut sensor = Sensor::new("Front Door", SensorKind::Door);
        sensor.set_active(true);
        store.add_sensor(sensor);

        let mut monitor = SecurityMonitor::new(store, FixedClassifier(false));
        monitor.process_image(&frame()).unwrap();

        assert_eq!(monitor.alarm_status(), AlarmStatus::PendingAlarm);
    }

    #[test]
    fn disarmed_sensor_change_steps_alarm_down() {
        let mut store = MemoryStore::new();
        store.set_alarm_status(AlarmStatus::Alarm);
        let sensor = Sensor::new("Front Door", SensorKind::Door);
        store.add_sensor(sensor.clone());

        let mut monitor = SecurityMonitor::new(store, FixedClassifier(false));
        monitor.set_sensor_active(&sensor, true).unwrap();

        assert_eq!(monitor.alarm_status(), AlarmStatus::PendingAlarm);
    }
}

// ============================================================================
// Callback Notification Tests
// ============================================================================

mod notifications {
    use super::*;

    #[test]
    fn alarm_callbacks_track_transitions() {
        let mut monitor = monitor(false);
        let door = Sensor::new("Front Door", SensorKind::Door);
        monitor.add_sensor(door.clone());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        monitor.on_alarm_changed(move |status| {
            seen_clone.lock().push(status);
        });

        monitor.set_arming_status(ArmingStatus::ArmedAway);
        monitor.set_sensor_active(&door, true).unwrap();
        monitor.set_arming_status(ArmingStatus::Disarmed);

        assert_eq!(
            *seen.lock(),
            vec![AlarmStatus::PendingAlarm, AlarmStatus::NoAlarm]
        );
    }

    #[test]
    fn cat_callbacks_receive_every_verdict() {
        let mut monitor = monitor(true);

        let verdicts = Arc::new(Mutex::new(Vec::new()));
        let verdicts_clone = verdicts.clone();
        monitor.on_cat_detected(move |detected| {
            verdicts_clone.lock().push(detected);
        });

        // Disarmed: no status change, but the verdict still goes out
        monitor.process_image(&frame()).unwrap();
        monitor.process_image(&frame()).unwrap();

        assert_eq!(*verdicts.lock(), vec![true, true]);
    }

    #[test]
    fn sensors_callbacks_fire_on_set_changes() {
        let mut monitor = monitor(false);
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();
        monitor.on_sensors_changed(move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        let door = Sensor::new("Front Door", SensorKind::Door);
        monitor.add_sensor(door.clone());
        monitor.set_sensor_active(&door, true).unwrap();
        monitor.remove_sensor(&door).unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut monitor = monitor(false);
        let door = Sensor::new("Front Door", SensorKind::Door);
        monitor.add_sensor(door.clone());

        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();
        let sub_id = monitor.on_alarm_changed(move |_| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        monitor.set_arming_status(ArmingStatus::Disarmed);
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        assert!(monitor.unsubscribe(sub_id));

        monitor.set_arming_status(ArmingStatus::Disarmed);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}

// ============================================================================
// Event Bus Tests
// ============================================================================

mod events {
    use super::*;

    #[test]
    fn events_arrive_in_operation_order() {
        let mut monitor = monitor(false);
        let door = Sensor::new("Front Door", SensorKind::Door);
        let mut rx = monitor.subscribe();

        monitor.add_sensor(door.clone());
        monitor.set_arming_status(ArmingStatus::ArmedAway);
        monitor.set_sensor_active(&door, true).unwrap();

        assert!(matches!(
            rx.try_recv().unwrap(),
            SecurityEvent::SensorAdded { .. }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            SecurityEvent::ArmingChanged {
                status: ArmingStatus::ArmedAway
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            SecurityEvent::AlarmChanged {
                status: AlarmStatus::PendingAlarm
            }
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            SecurityEvent::SensorStateChanged { .. }
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn detection_events_carry_the_verdict() {
        let mut monitor = monitor(true);
        let mut rx = monitor.subscribe();

        monitor.process_image(&frame()).unwrap();

        let event = rx.try_recv().unwrap();
        assert!(matches!(
            event,
            SecurityEvent::CatDetected { detected: true }
        ));
    }

    #[test]
    fn sensor_events_carry_the_updated_sensor() {
        let mut monitor = monitor(false);
        let door = Sensor::new("Front Door", SensorKind::Door);
        monitor.add_sensor(door.clone());
        monitor.set_arming_status(ArmingStatus::ArmedAway);

        let mut rx = monitor.subscribe();
        monitor.set_sensor_active(&door, true).unwrap();

        // AlarmChanged first (the write happens inside evaluation), then
        // the sensor state event
        let _ = rx.try_recv().unwrap();
        let event = rx.try_recv().unwrap();
        match event {
            SecurityEvent::SensorStateChanged { sensor } => {
                assert_eq!(sensor, door);
                assert!(sensor.is_active());
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
