//! Draw normalized landmarks, detections and pose axes onto RGB images.
//!
//! Landmark coordinates are fractions of the image size, as produced by pose,
//! hand and face landmark models. Drawing happens in place on an
//! [`image::DynamicImage`], which must hold 8-bit RGB data.
//!
//! ```rust,ignore
//! use landmark_overlay_rs::{draw_landmarks, DrawLandmarksParams, NormalizedLandmarkList, HAND_CONNECTIONS};
//!
//! let params = DrawLandmarksParams::with_connections(HAND_CONNECTIONS);
//! draw_landmarks(&mut image, &landmarks, &params)?;
//! ```

pub mod axis;
pub mod connections;
pub mod detection;
pub mod drawing;
pub mod drawing_spec;
pub mod error;
pub mod landmark;

pub use axis::{draw_axis, AxisPose, DrawAxisParams};
pub use connections::{ConnectionPreset, HAND_CONNECTIONS, POSE_CONNECTIONS};
pub use detection::{draw_detection, Detection, DrawDetectionParams, RelativeBoundingBox, RelativeKeypoint};
pub use drawing::{draw_landmarks, DrawLandmarksParams};
pub use drawing_spec::{DrawingSpec, SpecSource};
pub use error::{DrawError, DrawResult};
pub use landmark::{normalized_to_pixel, Connection, NormalizedLandmark, NormalizedLandmarkList};

pub use image;
pub use landmark_overlay_canvas as canvas;
