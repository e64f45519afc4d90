// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Image classification abstraction.
//!
//! The security monitor only needs a single question answered about a
//! camera frame: does it contain a cat? The [`ImageClassifier`] trait is
//! that seam; [`StubClassifier`] is the shipped stand-in that answers at
//! random, the way an educational simulator does.
//!
//! # Examples
//!
//! ```
//! use vigil_lib::image::{CameraImage, ImageClassifier, StubClassifier};
//!
//! let classifier = StubClassifier::new();
//! let frame = CameraImage::blank(320, 240);
//!
//! let verdict = classifier.contains_cat(&frame, 50.0).unwrap();
//! println!("cat: {verdict}");
//! ```

mod stub;

use std::fmt;

use crate::error::ImageError;

pub use stub::StubClassifier;

/// An owned camera frame.
///
/// This is a plain data carrier, not a binding to any image library: the
/// simulator never decodes real pictures. Pixel data is stored as RGBA
/// bytes, four per pixel.
#[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CameraImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CameraImage {
    /// Creates a frame from raw RGBA bytes.
    #[must_use]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Creates a black frame of the given dimensions.
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        let data = vec![0; (width as usize) * (height as usize) * 4];
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns `true` if the frame carries no pixel data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for CameraImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Elide the pixel buffer; it can be megabytes
        f.debug_struct("CameraImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Answers whether a camera frame contains a cat.
///
/// Implementations may consult a real model, a remote service, or nothing
/// at all. Failures propagate to the caller, which owns display and
/// logging.
pub trait ImageClassifier {
    /// Classifies a frame.
    ///
    /// `confidence_threshold` is the minimum confidence (0-100) required
    /// for a positive verdict; implementations without a confidence notion
    /// may ignore it.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is unusable or the backend fails.
    fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, ImageError>;
}
