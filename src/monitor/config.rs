// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Monitor configuration.

/// Configuration for a [`SecurityMonitor`](super::SecurityMonitor).
///
/// # Examples
///
/// ```
/// use vigil_lib::monitor::MonitorConfig;
///
/// let config = MonitorConfig::new()
///     .with_confidence_threshold(75.0)
///     .with_event_capacity(64);
///
/// assert_eq!(config.confidence_threshold(), 75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonitorConfig {
    /// Minimum classifier confidence (0-100) for a positive cat verdict.
    confidence_threshold: f32,
    /// Capacity of the security event broadcast channel.
    event_capacity: usize,
}

impl MonitorConfig {
    /// Default classifier confidence threshold.
    pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

    /// Default event channel capacity.
    pub const DEFAULT_EVENT_CAPACITY: usize = 256;

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            confidence_threshold: Self::DEFAULT_CONFIDENCE_THRESHOLD,
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Sets the classifier confidence threshold.
    #[must_use]
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Sets the event channel capacity.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Returns the classifier confidence threshold.
    #[must_use]
    pub fn confidence_threshold(&self) -> f32 {
        self.confidence_threshold
    }

    /// Returns the event channel capacity.
    #[must_use]
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MonitorConfig::new();
        assert_eq!(
            config.confidence_threshold(),
            MonitorConfig::DEFAULT_CONFIDENCE_THRESHOLD
        );
        assert_eq!(config.event_capacity(), MonitorConfig::DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn builder_setters() {
        let config = MonitorConfig::new()
            .with_confidence_threshold(90.0)
            .with_event_capacity(16);

        assert_eq!(config.confidence_threshold(), 90.0);
        assert_eq!(config.event_capacity(), 16);
    }
}
