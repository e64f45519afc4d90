// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stub image classifier.

use crate::error::ImageError;

use super::{CameraImage, ImageClassifier};

/// A classifier that answers at random.
///
/// The frame content and the confidence threshold are ignored; each call
/// flips a coin. This mirrors what the simulated security system needs:
/// a plausible-looking verdict stream without any actual recognition.
///
/// # Examples
///
/// ```
/// use vigil_lib::image::{CameraImage, ImageClassifier, StubClassifier};
///
/// let classifier = StubClassifier::new();
/// let frame = CameraImage::blank(64, 64);
/// let verdict = classifier.contains_cat(&frame, 50.0).unwrap();
/// println!("cat in frame: {verdict}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StubClassifier;

impl StubClassifier {
    /// Creates a new stub classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ImageClassifier for StubClassifier {
    fn contains_cat(
        &self,
        image: &CameraImage,
        _confidence_threshold: f32,
    ) -> Result<bool, ImageError> {
        if image.is_empty() {
            return Err(ImageError::EmptyFrame);
        }

        let verdict = rand::random::<bool>();
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            verdict,
            "Classified camera frame"
        );
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_non_empty_frame() {
        let classifier = StubClassifier::new();
        let frame = CameraImage::blank(32, 32);

        // The verdict is random; only the success matters here
        assert!(classifier.contains_cat(&frame, 50.0).is_ok());
    }

    #[test]
    fn rejects_empty_frame() {
        let classifier = StubClassifier::new();
        let frame = CameraImage::new(0, 0, Vec::new());

        let result = classifier.contains_cat(&frame, 50.0);
        assert_eq!(result.unwrap_err(), ImageError::EmptyFrame);
    }

    #[test]
    fn eventually_produces_both_verdicts() {
        let classifier = StubClassifier::new();
        let frame = CameraImage::blank(8, 8);

        let mut seen = [false, false];
        for _ in 0..256 {
            let verdict = classifier.contains_cat(&frame, 50.0).unwrap();
            seen[usize::from(verdict)] = true;
            if seen[0] && seen[1] {
                return;
            }
        }
        panic!("256 coin flips never changed face");
    }
}
