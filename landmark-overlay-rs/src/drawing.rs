//! Landmark and connection drawing.

use crate::drawing_spec::{DrawingSpec, SpecSource};
use crate::error::{DrawError, DrawResult};
use crate::landmark::{Connection, NormalizedLandmarkList};
use image::{DynamicImage, RgbImage};
use landmark_overlay_canvas::{CircleParams, LineParams, PixelPoint, RgbCanvas};

/// Options for [`draw_landmarks`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawLandmarksParams {
    /// Landmark index pairs to join with lines.
    pub connections: Vec<Connection>,
    /// Style for landmark points. `None` draws connections only.
    pub landmark_drawing_spec: Option<SpecSource<usize>>,
    /// Style for connection lines.
    pub connection_drawing_spec: SpecSource<Connection>,
    /// Landmarks with a visibility at or below this value are not drawn.
    pub visibility_threshold: f32,
    /// Landmarks with a presence at or below this value are not drawn.
    pub presence_threshold: f32,
}

impl Default for DrawLandmarksParams {
    fn default() -> Self {
        Self {
            connections: Vec::new(),
            landmark_drawing_spec: Some(DrawingSpec::landmark_default().into()),
            connection_drawing_spec: DrawingSpec::default().into(),
            visibility_threshold: 0.0,
            presence_threshold: 0.0,
        }
    }
}

impl DrawLandmarksParams {
    pub fn with_connections(connections: &[Connection]) -> Self {
        Self {
            connections: connections.to_vec(),
            ..Default::default()
        }
    }
}

/// Draw landmarks and the connections between them onto `image`.
///
/// Connections are drawn first, in order, then every drawable landmark is
/// drawn on top in list order. Landmarks hidden by their visibility or
/// presence score are skipped along with any connection touching them.
///
/// The image must be 8-bit RGB. All validation happens before the first
/// pixel is written, so an error leaves the image unchanged.
pub fn draw_landmarks(
    image: &mut DynamicImage,
    landmark_list: &NormalizedLandmarkList,
    params: &DrawLandmarksParams,
) -> DrawResult<()> {
    let rgb = rgb_target(image)?;

    let num_landmarks = landmark_list.len();
    for &(start, end) in &params.connections {
        if start >= num_landmarks || end >= num_landmarks {
            return Err(DrawError::InvalidConnectionIndex {
                start,
                end,
                len: num_landmarks,
            });
        }
    }

    let (width, height) = rgb.dimensions();
    let idx_to_coordinates: Vec<Option<PixelPoint>> = landmark_list
        .iter()
        .map(|landmark| {
            landmark
                .is_drawable(params.visibility_threshold, params.presence_threshold)
                .then(|| landmark.to_pixel(width, height))
        })
        .collect();

    // Resolve every style up front so a missing mapping entry fails before drawing.
    let mut lines = Vec::new();
    for &(start, end) in &params.connections {
        if let (Some(start_px), Some(end_px)) = (idx_to_coordinates[start], idx_to_coordinates[end]) {
            let spec = params
                .connection_drawing_spec
                .resolve(&(start, end))
                .ok_or(DrawError::MissingConnectionSpec { start, end })?;
            lines.push((start_px, end_px, *spec));
        }
    }

    let mut points = Vec::new();
    if let Some(landmark_spec) = &params.landmark_drawing_spec {
        for (index, landmark_px) in idx_to_coordinates.iter().enumerate() {
            if let Some(landmark_px) = landmark_px {
                let spec = landmark_spec
                    .resolve(&index)
                    .ok_or(DrawError::MissingLandmarkSpec { index })?;
                points.push((*landmark_px, *spec));
            }
        }
    }

    log::debug!(
        target: "landmarks",
        "draw_landmarks: {} of {} landmarks, {} of {} connections on {}x{}",
        points.len(),
        num_landmarks,
        lines.len(),
        params.connections.len(),
        width,
        height
    );

    if (lines.is_empty() && points.is_empty()) || width == 0 || height == 0 {
        return Ok(());
    }

    let mut canvas = RgbCanvas::from_rgb(rgb)?;
    for (start, end, spec) in &lines {
        draw_connection(&mut canvas, *start, *end, spec);
    }
    for (center, spec) in &points {
        draw_point(&mut canvas, *center, spec);
    }
    canvas.write_to(rgb)?;
    Ok(())
}

/// Borrow the 8-bit RGB buffer of `image`, rejecting every other layout.
pub(crate) fn rgb_target(image: &mut DynamicImage) -> DrawResult<&mut RgbImage> {
    let color = image.color();
    if color.channel_count() != 3 {
        return Err(DrawError::InvalidImageFormat {
            channels: color.channel_count(),
        });
    }
    image
        .as_mut_rgb8()
        .ok_or(DrawError::UnsupportedSampleType(color))
}

/// Draw a connection line in the spec's color and thickness.
pub fn draw_connection(canvas: &mut RgbCanvas, start: PixelPoint, end: PixelPoint, spec: &DrawingSpec) {
    canvas.stroke_line(
        &LineParams {
            start,
            end,
            thickness: spec.thickness,
        },
        spec.canvas_color(),
    );
}

/// Draw a landmark point: a filled disc of the spec's radius, outlined with
/// the spec's thickness when it is positive.
pub fn draw_point(canvas: &mut RgbCanvas, center: PixelPoint, spec: &DrawingSpec) {
    let color = spec.canvas_color();
    canvas.draw_circle(
        &CircleParams {
            center,
            radius: spec.circle_radius,
            thickness: -1,
        },
        color,
    );
    if spec.thickness > 0 {
        canvas.draw_circle(
            &CircleParams {
                center,
                radius: spec.circle_radius,
                thickness: spec.thickness,
            },
            color,
        );
    }
}
