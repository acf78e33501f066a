//! Parameter structs for canvas drawing operations.
//!
//! Coordinates are integer pixel indices. A primitive anchored at `(x, y)` is
//! centered on that pixel, not on its top-left corner.

/// An integer pixel position. May lie outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Device-space center of this pixel.
    pub(crate) fn center(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Parameters for a straight line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParams {
    /// Start pixel.
    pub start: PixelPoint,
    /// End pixel.
    pub end: PixelPoint,
    /// Stroke width in pixels. Values below 1 draw a one pixel hairline.
    pub thickness: i32,
}

/// Parameters for a circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleParams {
    /// Center pixel.
    pub center: PixelPoint,
    /// Radius in pixels.
    pub radius: i32,
    /// Outline width in pixels. Negative values fill the disc instead.
    pub thickness: i32,
}

/// Parameters for an axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// First corner pixel.
    pub start: PixelPoint,
    /// Opposite corner pixel.
    pub end: PixelPoint,
    /// Outline width in pixels. Negative values fill the rectangle instead.
    pub thickness: i32,
}

/// Parameters for a line with an arrow head at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowParams {
    /// Tail pixel.
    pub start: PixelPoint,
    /// Tip pixel.
    pub end: PixelPoint,
    /// Stroke width in pixels.
    pub thickness: i32,
    /// Length of the arrow head relative to the segment length.
    pub tip_length: f32,
}

impl ArrowParams {
    /// Arrow head end points, each at 45 degrees from the shaft.
    pub fn head(&self) -> (PixelPoint, PixelPoint) {
        let dx = (self.start.x - self.end.x) as f32;
        let dy = (self.start.y - self.end.y) as f32;
        let tip_size = (dx * dx + dy * dy).sqrt() * self.tip_length;
        let angle = dy.atan2(dx);
        let wing = |offset: f32| PixelPoint {
            x: (self.end.x as f32 + tip_size * (angle + offset).cos()).round() as i32,
            y: (self.end.y as f32 + tip_size * (angle + offset).sin()).round() as i32,
        };
        (
            wing(std::f32::consts::FRAC_PI_4),
            wing(-std::f32::consts::FRAC_PI_4),
        )
    }
}

/// A backend-neutral opaque RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CanvasColor {
    /// Create a color from 8-bit RGB components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, 255)
    }
}

impl From<CanvasColor> for image::Rgb<u8> {
    fn from(c: CanvasColor) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

impl From<[u8; 3]> for CanvasColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}
