//! Integration tests for landmark-overlay-canvas.

use image::RgbImage;
use landmark_overlay_canvas::{
    ArrowParams, CanvasColor, CircleParams, LineParams, PixelPoint, RectParams, RgbCanvas,
};
use rstest::rstest;

const BLACK: CanvasColor = CanvasColor::from_rgb8(0, 0, 0);
const GREEN: CanvasColor = CanvasColor::from_rgb8(0, 255, 0);

/// Test drawing onto an existing image and writing it back.
#[test]
fn test_draw_and_write_back() {
    let mut image = RgbImage::from_pixel(50, 50, image::Rgb([10, 20, 30]));
    let mut canvas = RgbCanvas::from_rgb(&image).unwrap();

    canvas.stroke_line(
        &LineParams {
            start: PixelPoint::new(5, 25),
            end: PixelPoint::new(45, 25),
            thickness: 1,
        },
        GREEN,
    );
    canvas.write_to(&mut image).unwrap();

    // On the line
    assert_eq!(image.get_pixel(25, 25), &image::Rgb([0, 255, 0]));
    // Background untouched
    assert_eq!(image.get_pixel(25, 10), &image::Rgb([10, 20, 30]));
}

/// Thick lines cover pixels on both sides of the centerline.
#[rstest]
#[case(2)]
#[case(3)]
#[case(5)]
fn test_thick_line(#[case] thickness: i32) {
    let mut canvas = RgbCanvas::new(40, 40).unwrap();
    canvas.stroke_line(
        &LineParams {
            start: PixelPoint::new(5, 20),
            end: PixelPoint::new(35, 20),
            thickness,
        },
        GREEN,
    );
    let covered = (0..40)
        .filter(|&y| canvas.pixel(20, y) == Some(GREEN))
        .count();
    assert_eq!(covered as i32, thickness);
}

/// Test stroked and filled rectangles.
#[test]
fn test_rect_outline() {
    let mut canvas = RgbCanvas::new(20, 20).unwrap();
    canvas.draw_rect(
        &RectParams {
            start: PixelPoint::new(2, 3),
            end: PixelPoint::new(12, 15),
            thickness: 1,
        },
        GREEN,
    );
    assert_eq!(canvas.pixel(2, 3), Some(GREEN));
    assert_eq!(canvas.pixel(12, 15), Some(GREEN));
    assert_eq!(canvas.pixel(7, 3), Some(GREEN));
    assert_eq!(canvas.pixel(7, 9), Some(BLACK));
}

/// Circles may extend past the canvas edge.
#[test]
fn test_circle_partially_off_canvas() {
    let mut canvas = RgbCanvas::new(10, 10).unwrap();
    canvas.draw_circle(
        &CircleParams {
            center: PixelPoint::new(0, 0),
            radius: 3,
            thickness: -1,
        },
        GREEN,
    );
    assert_eq!(canvas.pixel(0, 0), Some(GREEN));
    assert_eq!(canvas.pixel(1, 1), Some(GREEN));
    assert_eq!(canvas.pixel(9, 9), Some(BLACK));
}

/// The arrow shaft and both wings are drawn.
#[test]
fn test_arrowed_line() {
    let mut canvas = RgbCanvas::new(120, 40).unwrap();
    let arrow = ArrowParams {
        start: PixelPoint::new(10, 20),
        end: PixelPoint::new(110, 20),
        thickness: 1,
        tip_length: 0.1,
    };
    canvas.arrowed_line(&arrow, GREEN);

    assert_eq!(canvas.pixel(60, 20), Some(GREEN));

    // Wings lie behind the tip, one above and one below the shaft.
    let wing_pixels = |rows: std::ops::Range<u32>| {
        rows.flat_map(|y| (100..110).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(GREEN))
            .count()
    };
    assert!(wing_pixels(12..18) > 0);
    assert!(wing_pixels(23..29) > 0);
    assert_eq!(canvas.pixel(60, 10), Some(BLACK));
}
