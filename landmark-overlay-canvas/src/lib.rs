//! Hard-edged 2D primitives for RGB images using tiny-skia.
//!
//! This crate provides the small set of raster operations needed to annotate
//! an image: lines, circles, rectangles and arrows. Anti-aliasing is disabled
//! so every covered pixel takes the exact requested color.
//!
//! # Example
//!
//! ```rust,ignore
//! use landmark_overlay_canvas::{CanvasColor, LineParams, PixelPoint, RgbCanvas};
//!
//! let mut canvas = RgbCanvas::from_rgb(&image)?;
//! canvas.stroke_line(
//!     &LineParams { start: PixelPoint::new(0, 0), end: PixelPoint::new(9, 9), thickness: 2 },
//!     CanvasColor::from_rgb8(255, 0, 0),
//! );
//! canvas.write_to(&mut image)?;
//! ```

mod canvas;
mod error;
mod geometry;

// Re-export public API
pub use canvas::RgbCanvas;
pub use error::{CanvasError, CanvasResult};
pub use geometry::{ArrowParams, CanvasColor, CircleParams, LineParams, PixelPoint, RectParams};
