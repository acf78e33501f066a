//! Object detection results: keypoints and a bounding box in relative coordinates.

use crate::drawing::{draw_point, rgb_target};
use crate::drawing_spec::DrawingSpec;
use crate::error::DrawResult;
use crate::landmark::normalized_to_pixel;
use image::DynamicImage;
use landmark_overlay_canvas::{PixelPoint, RectParams, RgbCanvas};
use serde::{Deserialize, Serialize};

/// A keypoint in coordinates relative to the image size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeKeypoint {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keypoint_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// A bounding box in coordinates relative to the image size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeBoundingBox {
    pub xmin: f32,
    pub ymin: f32,
    pub width: f32,
    pub height: f32,
}

/// A single detection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub score: Vec<f32>,
    #[serde(default)]
    pub relative_keypoints: Vec<RelativeKeypoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_bounding_box: Option<RelativeBoundingBox>,
}

impl Detection {
    /// Whether there is anything to draw.
    pub fn has_location(&self) -> bool {
        !self.relative_keypoints.is_empty() || self.relative_bounding_box.is_some()
    }
}

/// Options for [`draw_detection`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawDetectionParams {
    pub keypoint_drawing_spec: DrawingSpec,
    pub bbox_drawing_spec: DrawingSpec,
}

impl Default for DrawDetectionParams {
    fn default() -> Self {
        Self {
            keypoint_drawing_spec: DrawingSpec::landmark_default(),
            bbox_drawing_spec: DrawingSpec::default(),
        }
    }
}

/// Draw the keypoints and bounding box of a detection onto `image`.
pub fn draw_detection(
    image: &mut DynamicImage,
    detection: &Detection,
    params: &DrawDetectionParams,
) -> DrawResult<()> {
    let rgb = rgb_target(image)?;
    let (width, height) = rgb.dimensions();
    if !detection.has_location() || width == 0 || height == 0 {
        return Ok(());
    }

    let to_pixel = |x: f32, y: f32| {
        PixelPoint::new(normalized_to_pixel(x, width), normalized_to_pixel(y, height))
    };

    let mut canvas = RgbCanvas::from_rgb(rgb)?;
    for keypoint in detection
        .relative_keypoints
        .iter()
        .filter(|keypoint| keypoint.x.is_finite() && keypoint.y.is_finite())
    {
        draw_point(
            &mut canvas,
            to_pixel(keypoint.x, keypoint.y),
            &params.keypoint_drawing_spec,
        );
    }
    if let Some(bbox) = &detection.relative_bounding_box {
        log::debug!(
            target: "landmarks",
            "draw_detection: bbox ({}, {}) {}x{}",
            bbox.xmin,
            bbox.ymin,
            bbox.width,
            bbox.height
        );
        canvas.draw_rect(
            &RectParams {
                start: to_pixel(bbox.xmin, bbox.ymin),
                end: to_pixel(bbox.xmin + bbox.width, bbox.ymin + bbox.height),
                thickness: params.bbox_drawing_spec.thickness,
            },
            params.bbox_drawing_spec.canvas_color(),
        );
    }
    canvas.write_to(rgb)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing_spec::{RED_COLOR, WHITE_COLOR};
    use crate::error::DrawError;
    use image::RgbImage;

    #[test]
    fn test_draw_keypoints_and_bbox() {
        let detection = Detection {
            relative_keypoints: vec![RelativeKeypoint {
                x: 0.5,
                y: 0.5,
                ..Default::default()
            }],
            relative_bounding_box: Some(RelativeBoundingBox {
                xmin: 0.2,
                ymin: 0.2,
                width: 0.6,
                height: 0.6,
            }),
            ..Default::default()
        };
        let mut image = DynamicImage::ImageRgb8(RgbImage::new(100, 100));
        draw_detection(&mut image, &detection, &Default::default()).unwrap();

        let rgb = image.as_rgb8().unwrap();
        assert_eq!(rgb.get_pixel(50, 50).0, RED_COLOR);
        assert_eq!(rgb.get_pixel(50, 20).0, WHITE_COLOR);
        assert_eq!(rgb.get_pixel(80, 50).0, WHITE_COLOR);
        assert_eq!(rgb.get_pixel(35, 35).0, [0, 0, 0]);
    }

    #[test]
    fn test_empty_detection_is_noop() {
        let mut image = DynamicImage::ImageRgb8(RgbImage::new(10, 10));
        draw_detection(&mut image, &Detection::default(), &Default::default()).unwrap();
        assert_eq!(image, DynamicImage::ImageRgb8(RgbImage::new(10, 10)));
    }

    #[test]
    fn test_nan_keypoint_is_skipped() {
        let detection = Detection {
            relative_keypoints: vec![
                RelativeKeypoint {
                    x: f32::NAN,
                    y: 0.0,
                    ..Default::default()
                },
                RelativeKeypoint {
                    x: 0.5,
                    y: 0.5,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let mut image = DynamicImage::ImageRgb8(RgbImage::new(20, 20));
        draw_detection(&mut image, &detection, &Default::default()).unwrap();

        let rgb = image.as_rgb8().unwrap();
        assert_eq!(rgb.get_pixel(10, 10).0, RED_COLOR);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_rejects_grayscale() {
        let mut image = DynamicImage::ImageLuma8(image::GrayImage::new(10, 10));
        let detection = Detection {
            relative_keypoints: vec![RelativeKeypoint::default()],
            ..Default::default()
        };
        assert!(matches!(
            draw_detection(&mut image, &detection, &Default::default()),
            Err(DrawError::InvalidImageFormat { channels: 1 })
        ));
    }

    #[test]
    fn test_deserialize_detection() {
        let detection: Detection = serde_json::from_str(
            r#"{"relative_keypoints": [{"x": 0.1, "y": 0.2}],
                "relative_bounding_box": {"xmin": 0.1, "ymin": 0.1, "width": 0.5, "height": 0.5}}"#,
        )
        .unwrap();
        assert!(detection.has_location());
        assert!(detection.label.is_empty());
    }
}
