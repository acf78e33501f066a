//! Drawing styles for points and lines.

use landmark_overlay_canvas::CanvasColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

pub const WHITE_COLOR: [u8; 3] = [224, 224, 224];
pub const BLACK_COLOR: [u8; 3] = [0, 0, 0];
pub const RED_COLOR: [u8; 3] = [255, 0, 0];
pub const GREEN_COLOR: [u8; 3] = [0, 128, 0];
pub const BLUE_COLOR: [u8; 3] = [0, 0, 255];

/// Color, line thickness and circle radius for one drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSpec {
    /// RGB color.
    pub color: [u8; 3],
    /// Line or outline thickness in pixels. Negative means filled.
    pub thickness: i32,
    /// Circle radius in pixels.
    pub circle_radius: i32,
}

impl Default for DrawingSpec {
    fn default() -> Self {
        Self {
            color: WHITE_COLOR,
            thickness: 2,
            circle_radius: 2,
        }
    }
}

impl DrawingSpec {
    /// Default spec with a different color.
    pub fn with_color(color: [u8; 3]) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Default style for landmark points.
    pub fn landmark_default() -> Self {
        Self::with_color(RED_COLOR)
    }

    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn circle_radius(mut self, circle_radius: i32) -> Self {
        self.circle_radius = circle_radius;
        self
    }

    pub fn canvas_color(&self) -> CanvasColor {
        CanvasColor::from(self.color)
    }
}

/// Either one spec shared by every element or a spec per element.
///
/// Landmarks are keyed by index and connections by their index pair.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecSource<K: Eq + Hash> {
    Shared(DrawingSpec),
    PerElement(HashMap<K, DrawingSpec>),
}

impl<K: Eq + Hash> SpecSource<K> {
    /// Spec for `key`, or `None` when a per-element mapping has no entry.
    pub fn resolve(&self, key: &K) -> Option<&DrawingSpec> {
        match self {
            SpecSource::Shared(spec) => Some(spec),
            SpecSource::PerElement(specs) => specs.get(key),
        }
    }
}

impl<K: Eq + Hash> From<DrawingSpec> for SpecSource<K> {
    fn from(spec: DrawingSpec) -> Self {
        SpecSource::Shared(spec)
    }
}

impl<K: Eq + Hash> From<HashMap<K, DrawingSpec>> for SpecSource<K> {
    fn from(specs: HashMap<K, DrawingSpec>) -> Self {
        SpecSource::PerElement(specs)
    }
}

impl<K: Eq + Hash> FromIterator<(K, DrawingSpec)> for SpecSource<K> {
    fn from_iter<I: IntoIterator<Item = (K, DrawingSpec)>>(iter: I) -> Self {
        SpecSource::PerElement(iter.into_iter().collect())
    }
}
