//! Error types for landmark-overlay-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The destination image does not match the canvas size.
    #[error("Size mismatch: canvas is {canvas_width}x{canvas_height}, image is {image_width}x{image_height}")]
    SizeMismatch {
        canvas_width: u32,
        canvas_height: u32,
        image_width: u32,
        image_height: u32,
    },
}
