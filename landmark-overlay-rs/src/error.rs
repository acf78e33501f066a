//! Error types for landmark drawing.

use landmark_overlay_canvas::CanvasError;
use thiserror::Error;

/// Result type alias using DrawError.
pub type DrawResult<T> = Result<T, DrawError>;

/// Errors raised by the drawing functions.
///
/// Every variant except `Canvas` is detected before the image is touched.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The image does not have exactly three channels.
    #[error("Input image must contain three channel rgb data (found {channels} channels)")]
    InvalidImageFormat { channels: u8 },

    /// The image has three channels but a sample type other than 8-bit.
    #[error("Input image must use 8-bit samples (found {0:?})")]
    UnsupportedSampleType(image::ColorType),

    /// A connection refers to a landmark that does not exist.
    #[error("Landmark index is out of range: connection ({start}, {end}) with {len} landmarks")]
    InvalidConnectionIndex { start: usize, end: usize, len: usize },

    /// A per-landmark spec mapping has no entry for a drawn landmark.
    #[error("No drawing spec for landmark {index}")]
    MissingLandmarkSpec { index: usize },

    /// A per-connection spec mapping has no entry for a drawn connection.
    #[error("No drawing spec for connection ({start}, {end})")]
    MissingConnectionSpec { start: usize, end: usize },

    /// The raster surface could not be created or written back.
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),
}
