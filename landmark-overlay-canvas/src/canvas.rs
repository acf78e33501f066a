//! RGB raster canvas backed by a tiny-skia pixmap.

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{ArrowParams, CanvasColor, CircleParams, LineParams, PixelPoint, RectParams};
use image::RgbImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Opaque RGB canvas.
///
/// Pixels are copied in from an [`RgbImage`], drawn on without anti-aliasing
/// so every touched pixel takes the exact paint color, and copied back out
/// with [`RgbCanvas::write_to`].
pub struct RgbCanvas {
    width: u32,
    height: u32,
    pixmap: Pixmap,
}

impl RgbCanvas {
    /// Create a black canvas with the specified dimensions.
    ///
    /// Fails when either dimension is zero or the pixel buffer would not fit
    /// in memory addressable by tiny-skia.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        pixmap.fill(tiny_skia::Color::BLACK);
        Ok(Self {
            width,
            height,
            pixmap,
        })
    }

    /// Create a canvas holding a copy of `image`.
    pub fn from_rgb(image: &RgbImage) -> CanvasResult<Self> {
        let mut canvas = Self::new(image.width(), image.height())?;
        for (dst, src) in canvas
            .pixmap
            .data_mut()
            .chunks_exact_mut(4)
            .zip(image.as_raw().chunks_exact(3))
        {
            dst[..3].copy_from_slice(src);
            dst[3] = 255;
        }
        Ok(canvas)
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<CanvasColor> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(CanvasColor::from_rgb8(p.red(), p.green(), p.blue()))
    }

    /// Copy the canvas contents into `image`, which must have the same size.
    pub fn write_to(&self, image: &mut RgbImage) -> CanvasResult<()> {
        if image.dimensions() != (self.width, self.height) {
            return Err(CanvasError::SizeMismatch {
                canvas_width: self.width,
                canvas_height: self.height,
                image_width: image.width(),
                image_height: image.height(),
            });
        }
        for (dst, src) in image
            .chunks_exact_mut(3)
            .zip(self.pixmap.data().chunks_exact(4))
        {
            // All paints are opaque, so premultiplied and straight RGB agree.
            dst.copy_from_slice(&src[..3]);
        }
        Ok(())
    }

    /// Consume the canvas and return its contents as a new image.
    pub fn into_rgb(self) -> CanvasResult<RgbImage> {
        let mut image = RgbImage::new(self.width, self.height);
        self.write_to(&mut image)?;
        Ok(image)
    }

    // --- Primitives ---

    /// Stroke a straight line with round caps.
    pub fn stroke_line(&mut self, params: &LineParams, color: CanvasColor) {
        log::debug!(
            target: "canvas",
            "line ({}, {}) -> ({}, {}) width {}",
            params.start.x, params.start.y, params.end.x, params.end.y, params.thickness
        );
        let (x0, y0) = params.start.center();
        let (x1, y1) = params.end.center();
        if params.start == params.end {
            // A zero-length segment strokes to nothing; draw its round cap directly.
            self.fill_disc(params.start, params.thickness.max(1) as f32 / 2.0, color);
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: stroke_width(params.thickness),
                line_cap: tiny_skia::LineCap::Round,
                line_join: tiny_skia::LineJoin::Round,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    /// Draw a circle outline, or a filled disc when the thickness is negative.
    pub fn draw_circle(&mut self, params: &CircleParams, color: CanvasColor) {
        log::debug!(
            target: "canvas",
            "circle ({}, {}) r={} thickness {}",
            params.center.x, params.center.y, params.radius, params.thickness
        );
        if params.thickness < 0 {
            self.fill_disc(params.center, params.radius as f32, color);
            return;
        }
        let (cx, cy) = params.center.center();
        if params.radius <= 0 {
            self.fill_disc(params.center, params.thickness.max(1) as f32 / 2.0, color);
            return;
        }
        if let Some(path) = PathBuilder::from_circle(cx, cy, params.radius as f32) {
            let stroke = Stroke {
                width: stroke_width(params.thickness),
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    /// Draw a rectangle outline, or a filled rectangle when the thickness is negative.
    pub fn draw_rect(&mut self, params: &RectParams, color: CanvasColor) {
        log::debug!(
            target: "canvas",
            "rect ({}, {}) -> ({}, {}) thickness {}",
            params.start.x, params.start.y, params.end.x, params.end.y, params.thickness
        );
        let left = params.start.x.min(params.end.x);
        let right = params.start.x.max(params.end.x);
        let top = params.start.y.min(params.end.y);
        let bottom = params.start.y.max(params.end.y);

        if params.thickness < 0 {
            let rect = tiny_skia::Rect::from_ltrb(
                left as f32,
                top as f32,
                right as f32 + 1.0,
                bottom as f32 + 1.0,
            );
            if let Some(rect) = rect {
                self.pixmap
                    .fill_rect(rect, &paint(color), Transform::identity(), None);
            }
            return;
        }

        let (l, t) = PixelPoint::new(left, top).center();
        let (r, b) = PixelPoint::new(right, bottom).center();
        let mut pb = PathBuilder::new();
        pb.move_to(l, t);
        pb.line_to(r, t);
        pb.line_to(r, b);
        pb.line_to(l, b);
        pb.close();
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: stroke_width(params.thickness),
                line_join: tiny_skia::LineJoin::Miter,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    /// Stroke a line with a two-segment arrow head at its end.
    pub fn arrowed_line(&mut self, params: &ArrowParams, color: CanvasColor) {
        let (left, right) = params.head();
        for (start, end) in [
            (params.start, params.end),
            (params.end, left),
            (params.end, right),
        ] {
            self.stroke_line(
                &LineParams {
                    start,
                    end,
                    thickness: params.thickness,
                },
                color,
            );
        }
    }

    fn fill_disc(&mut self, center: PixelPoint, radius: f32, color: CanvasColor) {
        let (cx, cy) = center.center();
        match PathBuilder::from_circle(cx, cy, radius.max(0.5)) {
            Some(path) => {
                self.pixmap.fill_path(
                    &path,
                    &paint(color),
                    FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            }
            None => {
                if let (Ok(x), Ok(y)) = (u32::try_from(center.x), u32::try_from(center.y)) {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: CanvasColor) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            self.pixmap.data_mut()[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
}

/// tiny-skia treats a zero width as a hairline, which covers exactly one pixel per step.
fn stroke_width(thickness: i32) -> f32 {
    if thickness <= 1 {
        0.0
    } else {
        thickness as f32
    }
}

fn paint(color: CanvasColor) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias: false,
        ..Default::default()
    };
    paint.set_color(color.into());
    paint
}
