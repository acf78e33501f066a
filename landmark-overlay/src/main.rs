use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use image::DynamicImage;
use landmark_overlay_rs::{
    draw_axis, draw_detection, draw_landmarks, AxisPose, ConnectionPreset, Detection,
    DrawAxisParams, DrawDetectionParams, DrawLandmarksParams, DrawingSpec, NormalizedLandmark,
    NormalizedLandmarkList,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// landmark-overlay: A utility for drawing landmarks, detections and pose axes onto images
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Draw a landmark list and its connections
    Draw {
        /// Path to input image file
        #[arg(short, long)]
        input_file: String,

        /// Path to landmark JSON file
        #[arg(short, long)]
        landmarks_file: String,

        /// Path to output image file to be created
        #[arg(short, long)]
        output_file: String,

        /// Connection topology. One of none, pose, hand
        #[arg(short, long, default_value = "none")]
        connections: ConnectionPreset,

        /// Path to JSON file with "landmark" and/or "connection" drawing specs
        #[arg(short, long)]
        style_file: Option<String>,

        /// Hide landmarks with visibility at or below this value
        #[arg(long, default_value_t = 0.0)]
        visibility_threshold: f32,

        /// Hide landmarks with presence at or below this value
        #[arg(long, default_value_t = 0.0)]
        presence_threshold: f32,
    },

    /// Draw the keypoints and bounding box of a detection
    Detection {
        /// Path to input image file
        #[arg(short, long)]
        input_file: String,

        /// Path to detection JSON file
        #[arg(short, long)]
        detection_file: String,

        /// Path to output image file to be created
        #[arg(short, long)]
        output_file: String,

        /// Path to JSON file with "keypoint" and/or "bbox" drawing specs
        #[arg(short, long)]
        style_file: Option<String>,
    },

    /// Draw the axes of an object pose given as rotation and translation
    Axis {
        /// Path to input image file
        #[arg(short, long)]
        input_file: String,

        /// Path to pose JSON file with "rotation" and "translation"
        #[arg(short, long)]
        pose_file: String,

        /// Path to output image file to be created
        #[arg(short, long)]
        output_file: String,

        /// Length of each axis in pose units
        #[arg(long, default_value_t = 0.1)]
        axis_length: f32,

        /// Axis line thickness in pixels
        #[arg(long, default_value_t = 2)]
        thickness: i32,
    },
}

/// Landmark files hold either a bare array or a `{"landmark": [...]}` object.
#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkFile {
    Bare(Vec<NormalizedLandmark>),
    List(NormalizedLandmarkList),
}

#[derive(Deserialize, Default)]
struct LandmarkStyle {
    landmark: Option<DrawingSpec>,
    connection: Option<DrawingSpec>,
}

#[derive(Deserialize, Default)]
struct DetectionStyle {
    keypoint: Option<DrawingSpec>,
    bbox: Option<DrawingSpec>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Draw {
            input_file,
            landmarks_file,
            output_file,
            connections,
            style_file,
            visibility_threshold,
            presence_threshold,
        } => {
            let mut image = read_image(&input_file)?;
            let landmarks = match read_json::<LandmarkFile>(&landmarks_file)? {
                LandmarkFile::Bare(landmark) => NormalizedLandmarkList::new(landmark),
                LandmarkFile::List(list) => list,
            };
            let style: LandmarkStyle = read_optional_json(style_file.as_deref())?;

            let mut params = DrawLandmarksParams {
                connections: connections.connections().to_vec(),
                visibility_threshold,
                presence_threshold,
                ..Default::default()
            };
            if let Some(spec) = style.landmark {
                params.landmark_drawing_spec = Some(spec.into());
            }
            if let Some(spec) = style.connection {
                params.connection_drawing_spec = spec.into();
            }

            log::info!(
                "Drawing {} landmarks with {} connections",
                landmarks.len(),
                params.connections.len()
            );
            draw_landmarks(&mut image, &landmarks, &params).context("Failed to draw landmarks")?;
            write_image(&image, &output_file)
        }
        Commands::Detection {
            input_file,
            detection_file,
            output_file,
            style_file,
        } => {
            let mut image = read_image(&input_file)?;
            let detection: Detection = read_json(&detection_file)?;
            let style: DetectionStyle = read_optional_json(style_file.as_deref())?;

            let mut params = DrawDetectionParams::default();
            if let Some(spec) = style.keypoint {
                params.keypoint_drawing_spec = spec;
            }
            if let Some(spec) = style.bbox {
                params.bbox_drawing_spec = spec;
            }

            draw_detection(&mut image, &detection, &params).context("Failed to draw detection")?;
            write_image(&image, &output_file)
        }
        Commands::Axis {
            input_file,
            pose_file,
            output_file,
            axis_length,
            thickness,
        } => {
            let mut image = read_image(&input_file)?;
            let pose: AxisPose = read_json(&pose_file)?;
            let params = DrawAxisParams {
                axis_length,
                axis_drawing_spec: DrawingSpec::default().thickness(thickness),
                ..Default::default()
            };

            draw_axis(&mut image, &pose, &params).context("Failed to draw axis")?;
            write_image(&image, &output_file)
        }
    }
}

/// Read an image and convert it to 8-bit RGB, dropping any alpha channel.
fn read_image(path: &str) -> Result<DynamicImage> {
    let path = shell_path(path);
    let image = image::open(&path)
        .with_context(|| format!("Failed to read input image: {}", path.display()))?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

fn write_image(image: &DynamicImage, path: &str) -> Result<()> {
    let path = shell_path(path);
    image
        .save(&path)
        .with_context(|| format!("Failed to write output image to {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let path = shell_path(path);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

fn read_optional_json<T: DeserializeOwned + Default>(path: Option<&str>) -> Result<T> {
    match path {
        Some(path) => read_json(path),
        None => Ok(T::default()),
    }
}

/// Expand `~` and environment variables so paths copied from a shell work as-is.
fn shell_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            log::warn!("Failed to expand path {path}: {err}");
            PathBuf::from(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_file_accepts_bare_array() {
        let file: LandmarkFile = serde_json::from_str(r#"[{"x": 0.1, "y": 0.2}]"#).unwrap();
        assert!(matches!(file, LandmarkFile::Bare(ref v) if v.len() == 1));
    }

    #[test]
    fn test_landmark_file_accepts_object() {
        let file: LandmarkFile =
            serde_json::from_str(r#"{"landmark": [{"x": 0.1, "y": 0.2}, {"x": 0.3, "y": 0.4}]}"#)
                .unwrap();
        assert!(matches!(file, LandmarkFile::List(ref l) if l.len() == 2));
    }

    #[test]
    fn test_partial_style() {
        let style: LandmarkStyle =
            serde_json::from_str(r#"{"connection": {"color": [255, 0, 0], "thickness": 4}}"#)
                .unwrap();
        assert!(style.landmark.is_none());
        assert_eq!(style.connection.unwrap().thickness, 4);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let result = Cli::try_parse_from([
            "landmark-overlay",
            "draw",
            "-i",
            "in.png",
            "-l",
            "lm.json",
            "-o",
            "out.png",
            "--connections",
            "tail",
        ]);
        assert!(result.is_err());
    }
}
