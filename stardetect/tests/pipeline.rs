//! End-to-end tests of the star detection pipeline on synthetic frames.

use image::{Rgb, RgbImage};
use stardetect::{detect_in_image, detect_stars, DetectError, DetectorConfig};

/// Paint a uniform image of the given gray level.
fn flat_frame(width: u32, height: u32, level: u8) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([level, level, level]))
}

/// Black frame with a solid white square centered at (`center_row`, `center_col`).
fn frame_with_square(size: u32, center_row: u32, center_col: u32, half: u32) -> RgbImage {
    let mut frame = RgbImage::new(size, size);
    for row in (center_row - half)..=(center_row + half) {
        for col in (center_col - half)..=(center_col + half) {
            frame.put_pixel(col, row, Rgb([255, 255, 255]));
        }
    }
    frame
}

#[test]
fn detections_stay_within_image_bounds() {
    let frame = frame_with_square(20, 10, 10, 1);
    let (result, _) = detect_in_image(&frame, &DetectorConfig::default()).unwrap();

    for star in &result.stars {
        assert!(star.row < 20, "row {} out of bounds", star.row);
        assert!(star.col < 20, "col {} out of bounds", star.col);
    }
}

#[test]
fn detections_come_in_raster_order() {
    let frame = frame_with_square(24, 8, 15, 1);
    let (result, _) = detect_in_image(&frame, &DetectorConfig::default()).unwrap();

    for pair in result.stars.windows(2) {
        let earlier = (pair[0].row, pair[0].col);
        let later = (pair[1].row, pair[1].col);
        assert!(
            earlier < later,
            "detections out of raster order: {:?} before {:?}",
            earlier,
            later
        );
    }
}

#[test]
fn missing_path_fails_with_read_error() {
    let result = detect_stars(
        "definitely/not/a/real/image.png",
        &DetectorConfig::default(),
    );

    assert!(matches!(result, Err(DetectError::Read { .. })));
}

#[test]
fn corrupt_file_fails_with_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not_an_image.png");
    std::fs::write(&path, b"this is not image data").unwrap();

    let result = detect_stars(&path, &DetectorConfig::default());

    assert!(matches!(result, Err(DetectError::Read { .. })));
}

#[test]
fn pipeline_is_deterministic() {
    let frame = frame_with_square(20, 10, 10, 1);
    let config = DetectorConfig::default();

    let (first, _) = detect_in_image(&frame, &config).unwrap();
    let (second, _) = detect_in_image(&frame, &config).unwrap();

    assert_eq!(first.stars, second.stars);
    assert_eq!(first.annotated, second.annotated);
}

#[test]
fn decode_and_in_memory_paths_agree() {
    let frame = frame_with_square(20, 10, 10, 1);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.png");
    frame.save(&path).unwrap();

    let config = DetectorConfig::default();
    let from_file = detect_stars(&path, &config).unwrap();
    let (in_memory, _) = detect_in_image(&frame, &config).unwrap();

    assert_eq!(from_file.stars, in_memory.stars);
}

#[test]
fn raising_c_never_increases_detections() {
    let frame = frame_with_square(30, 15, 15, 1);
    let mut previous = usize::MAX;

    for c in [0.0, 2.0, 5.0, 10.0, 20.0] {
        let config = DetectorConfig {
            c,
            ..Default::default()
        };
        let (result, _) = detect_in_image(&frame, &config).unwrap();
        assert!(
            result.stars.len() <= previous,
            "c = {} increased detections to {}",
            c,
            result.stars.len()
        );
        previous = result.stars.len();
    }
}

#[test]
fn bright_square_detected_near_its_position() {
    let frame = frame_with_square(20, 10, 10, 1);
    let (result, _) = detect_in_image(&frame, &DetectorConfig::default()).unwrap();

    assert!(
        !result.stars.is_empty(),
        "bright square produced no detections"
    );

    for star in &result.stars {
        let dr = star.row.abs_diff(10);
        let dc = star.col.abs_diff(10);
        assert!(
            dr <= 8 && dc <= 8,
            "detection at ({}, {}) is far from the square",
            star.row,
            star.col
        );
    }

    // The annotated frame carries a green marker at a detected position
    let sample = &result.stars[result.stars.len() / 2];
    assert_eq!(
        *result
            .annotated
            .get_pixel(sample.x() as u32, sample.y() as u32),
        Rgb([0, 255, 0])
    );
}

#[test]
fn off_center_square_is_not_transposed() {
    // Square at row 6, col 16 in a 24x24 frame; a (row, col) mixup would
    // cluster detections around (16, 6) instead
    let frame = frame_with_square(24, 6, 16, 1);
    let (result, _) = detect_in_image(&frame, &DetectorConfig::default()).unwrap();

    assert!(!result.stars.is_empty());

    for star in &result.stars {
        assert!(
            star.row.abs_diff(6) <= 8 && star.col.abs_diff(16) <= 8,
            "detection at ({}, {}) not near (6, 16)",
            star.row,
            star.col
        );
    }
}

#[test]
fn flat_sky_yields_no_detections() {
    for level in [0u8, 128, 255] {
        let frame = flat_frame(32, 32, level);
        let (result, _) = detect_in_image(&frame, &DetectorConfig::default()).unwrap();
        assert!(
            result.stars.is_empty(),
            "flat level {} produced {} spurious detections",
            level,
            result.stars.len()
        );
    }
}

#[test]
fn stage_images_do_not_affect_result() {
    let frame = frame_with_square(20, 10, 10, 1);
    let config = DetectorConfig::default();

    let (with_stages, stages) = detect_in_image(&frame, &config).unwrap();

    assert_eq!(stages.opened.dim(), (20, 20));
    assert_eq!(
        with_stages.stars.len(),
        stages
            .opened
            .iter()
            .filter(|&&v| v == 255)
            .count()
    );
}
