//! Detection markers on the output image.

use image::{Rgb, RgbImage};

use super::detection::Detection;

/// Marker color for detected pixels.
pub const MARKER_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Marker radius in pixels.
pub const MARKER_RADIUS: i64 = 3;

/// Copy the original image and draw a filled circle at every detection.
///
/// Circles are centered at `(x, y) = (col, row)`, drawn in detection
/// sequence order so later markers overdraw earlier ones where they
/// overlap, and clipped at the image border.
///
/// # Arguments
/// * `image` - Original RGB image
/// * `detections` - Detections in draw order
///
/// # Returns
/// * Annotated copy of the input image
pub fn draw_detections(image: &RgbImage, detections: &[Detection]) -> RgbImage {
    let mut annotated = image.clone();

    for detection in detections {
        draw_filled_circle(
            &mut annotated,
            detection.x() as i64,
            detection.y() as i64,
            MARKER_RADIUS,
            MARKER_COLOR,
        );
    }

    annotated
}

/// Rasterize an opaque filled circle, skipping out-of-bounds pixels.
fn draw_filled_circle(image: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: Rgb<u8>) {
    let (width, height) = image.dimensions();

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                continue;
            }
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_lands_at_col_row() {
        let image = RgbImage::new(20, 20);
        let detections = [Detection { row: 5, col: 9 }];

        let annotated = draw_detections(&image, &detections);

        // Center at (x, y) = (9, 5), not the transposed position
        assert_eq!(*annotated.get_pixel(9, 5), MARKER_COLOR);
        assert_eq!(*annotated.get_pixel(12, 5), MARKER_COLOR); // radius 3 along x
        assert_eq!(*annotated.get_pixel(9, 8), MARKER_COLOR); // radius 3 along y
        assert_eq!(*annotated.get_pixel(13, 5), Rgb([0, 0, 0])); // outside the disk
        assert_eq!(*annotated.get_pixel(5, 9), Rgb([0, 0, 0])); // transposed center untouched
    }

    #[test]
    fn test_original_untouched() {
        let image = RgbImage::new(10, 10);
        let detections = [Detection { row: 4, col: 4 }];

        let _ = draw_detections(&image, &detections);

        assert_eq!(*image.get_pixel(4, 4), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_clipping_at_border() {
        let image = RgbImage::new(8, 8);
        let detections = [
            Detection { row: 0, col: 0 },
            Detection { row: 7, col: 7 },
        ];

        let annotated = draw_detections(&image, &detections);

        assert_eq!(*annotated.get_pixel(0, 0), MARKER_COLOR);
        assert_eq!(*annotated.get_pixel(7, 7), MARKER_COLOR);
    }

    #[test]
    fn test_draw_order_overwrites() {
        let mut image = RgbImage::new(10, 10);
        image.put_pixel(5, 5, Rgb([255, 0, 0]));

        let detections = [Detection { row: 5, col: 5 }];
        let annotated = draw_detections(&image, &detections);

        assert_eq!(*annotated.get_pixel(5, 5), MARKER_COLOR);
    }
}
