//! Normalized landmark records and the normalized-to-pixel mapping.

use landmark_overlay_canvas::PixelPoint;
use serde::{Deserialize, Serialize};

/// A pair of landmark indices joined by a line.
pub type Connection = (usize, usize);

/// A single landmark in normalized image coordinates.
///
/// `x` and `y` are fractions of the image width and height. They are not
/// restricted to `[0, 1]`; points outside that range land off the image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    /// Depth, with roughly the same scale as `x`. Not used for 2D drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    /// Likelihood that the landmark is visible (not occluded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
    /// Likelihood that the landmark is present in the frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<f32>,
}

impl NormalizedLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_presence(mut self, presence: f32) -> Self {
        self.presence = Some(presence);
        self
    }

    /// Whether the landmark should be drawn.
    ///
    /// A score at or below its threshold hides the landmark. Unset scores
    /// never hide it. A landmark without a finite position is never drawn.
    pub fn is_drawable(&self, visibility_threshold: f32, presence_threshold: f32) -> bool {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return false;
        }
        let hidden = |score: Option<f32>, threshold: f32| score.is_some_and(|s| s <= threshold);
        !(hidden(self.visibility, visibility_threshold) || hidden(self.presence, presence_threshold))
    }

    /// Pixel position of this landmark on an image of the given size.
    pub fn to_pixel(&self, width: u32, height: u32) -> PixelPoint {
        PixelPoint::new(
            normalized_to_pixel(self.x, width),
            normalized_to_pixel(self.y, height),
        )
    }
}

/// An ordered list of landmarks. Positions in the list are the indices used
/// by connections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLandmarkList {
    #[serde(default)]
    pub landmark: Vec<NormalizedLandmark>,
}

impl NormalizedLandmarkList {
    pub fn new(landmark: Vec<NormalizedLandmark>) -> Self {
        Self { landmark }
    }

    pub fn len(&self) -> usize {
        self.landmark.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmark.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedLandmark> {
        self.landmark.iter()
    }
}

impl From<Vec<NormalizedLandmark>> for NormalizedLandmarkList {
    fn from(landmark: Vec<NormalizedLandmark>) -> Self {
        Self { landmark }
    }
}

impl FromIterator<NormalizedLandmark> for NormalizedLandmarkList {
    fn from_iter<I: IntoIterator<Item = NormalizedLandmark>>(iter: I) -> Self {
        Self {
            landmark: iter.into_iter().collect(),
        }
    }
}

/// Map a normalized coordinate onto a pixel index along an axis of `extent` pixels.
///
/// Rounds to the nearest pixel. Inside `[0, 1]` the result is kept on the
/// image, so `1.0` maps to the last pixel rather than one past it. Values
/// outside that range pass through unclamped.
pub fn normalized_to_pixel(value: f32, extent: u32) -> i32 {
    let scaled = (value * extent as f32).round() as i32;
    if (0.0..=1.0).contains(&value) {
        scaled.min(extent as i32 - 1).max(0)
    } else {
        scaled
    }
}
