//! Pose axis rendering.
//!
//! Draws the X, Y and Z axes of an object pose given in camera coordinates.
//! Axis end points are projected with a pinhole model into normalized device
//! coordinates, then mapped to pixels.

use crate::drawing::rgb_target;
use crate::drawing_spec::{DrawingSpec, BLUE_COLOR, GREEN_COLOR, RED_COLOR};
use crate::error::DrawResult;
use image::DynamicImage;
use landmark_overlay_canvas::{ArrowParams, CanvasColor, PixelPoint, RgbCanvas};
use serde::{Deserialize, Serialize};

/// Keeps the projection finite for points on the camera plane.
const DEPTH_EPSILON: f32 = 1e-5;

/// Arrow head length as a fraction of the arrow length.
const ARROW_TIP_LENGTH: f32 = 0.1;

/// Rotation and translation of an object in camera coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPose {
    /// Row-major 3x3 rotation matrix.
    pub rotation: [[f32; 3]; 3],
    pub translation: [f32; 3],
}

/// Options for [`draw_axis`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawAxisParams {
    /// Focal length in normalized device coordinates.
    pub focal_length: (f32, f32),
    /// Principal point in normalized device coordinates.
    pub principal_point: (f32, f32),
    /// Length of each drawn axis, in the units of the translation.
    pub axis_length: f32,
    /// Only the thickness is used; the axes are always red, green and blue.
    pub axis_drawing_spec: DrawingSpec,
}

impl Default for DrawAxisParams {
    fn default() -> Self {
        Self {
            focal_length: (1.0, 1.0),
            principal_point: (0.0, 0.0),
            axis_length: 0.1,
            axis_drawing_spec: DrawingSpec::default(),
        }
    }
}

/// Project the origin and the X, Y and Z axis end points to pixels.
pub fn project_axis(pose: &AxisPose, params: &DrawAxisParams, width: u32, height: u32) -> [PixelPoint; 4] {
    let (fx, fy) = params.focal_length;
    let (px, py) = params.principal_point;
    let r = &pose.rotation;
    let t = &pose.translation;

    let project = |axis: Option<usize>| {
        // Rotating a unit basis vector selects a column of the rotation matrix.
        let [x, y, z] = match axis {
            Some(i) => [0, 1, 2].map(|row| r[row][i] * params.axis_length + t[row]),
            None => *t,
        };
        let x_ndc = (-fx * x / (z + DEPTH_EPSILON) + px).clamp(-1.0, 1.0);
        let y_ndc = (-fy * y / (z + DEPTH_EPSILON) + py).clamp(-1.0, 1.0);
        PixelPoint::new(
            ((1.0 + x_ndc) * 0.5 * width as f32) as i32,
            ((1.0 - y_ndc) * 0.5 * height as f32) as i32,
        )
    };

    [project(None), project(Some(0)), project(Some(1)), project(Some(2))]
}

/// Draw the X (red), Y (green) and Z (blue) axes of `pose` onto `image`.
pub fn draw_axis(image: &mut DynamicImage, pose: &AxisPose, params: &DrawAxisParams) -> DrawResult<()> {
    let rgb = rgb_target(image)?;
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Ok(());
    }

    let [origin, x_axis, y_axis, z_axis] = project_axis(pose, params, width, height);
    log::debug!(
        target: "landmarks",
        "draw_axis: origin {:?} x {:?} y {:?} z {:?}",
        origin,
        x_axis,
        y_axis,
        z_axis
    );

    let mut canvas = RgbCanvas::from_rgb(rgb)?;
    for (end, color) in [(x_axis, RED_COLOR), (y_axis, GREEN_COLOR), (z_axis, BLUE_COLOR)] {
        canvas.arrowed_line(
            &ArrowParams {
                start: origin,
                end,
                thickness: params.axis_drawing_spec.thickness,
                tip_length: ARROW_TIP_LENGTH,
            },
            CanvasColor::from(color),
        );
    }
    canvas.write_to(rgb)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    const IDENTITY: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    fn pose() -> AxisPose {
        AxisPose {
            rotation: IDENTITY,
            translation: [0.0, 0.0, -1.0],
        }
    }

    fn params() -> DrawAxisParams {
        DrawAxisParams {
            axis_length: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_project_identity_pose() {
        let [origin, x_axis, y_axis, z_axis] = project_axis(&pose(), &params(), 100, 100);
        assert_eq!(origin, PixelPoint::new(50, 50));
        assert_eq!(x_axis.y, 50);
        assert!((x_axis.x - 75).abs() <= 1);
        assert_eq!(y_axis.x, 50);
        assert!((y_axis.y - 25).abs() <= 1);
        // The Z axis lies along the line of sight.
        assert_eq!(z_axis, origin);
    }

    #[test]
    fn test_projection_is_clamped_to_image() {
        let pose = AxisPose {
            rotation: IDENTITY,
            translation: [10.0, 0.0, -1.0],
        };
        let [origin, ..] = project_axis(&pose, &params(), 100, 100);
        assert_eq!(origin.x, 100);
    }

    #[test]
    fn test_draw_axis_colors() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::new(100, 100));
        draw_axis(&mut image, &pose(), &params()).unwrap();
        let rgb = image.as_rgb8().unwrap();
        assert_eq!(rgb.get_pixel(62, 50).0, RED_COLOR);
        assert_eq!(rgb.get_pixel(50, 37).0, GREEN_COLOR);
        // Z is drawn last and covers the shared origin.
        assert_eq!(rgb.get_pixel(50, 50).0, BLUE_COLOR);
    }
}
