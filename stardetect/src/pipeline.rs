//! Star detection pipeline orchestration.
//!
//! The stages run in a fixed order, each consuming the previous stage's
//! output: grayscale, enhancement, blur, adaptive threshold, morphological
//! opening, coordinate extraction, annotation. The whole pipeline is
//! deterministic and synchronous; the only fallible step is the initial
//! decode.

use std::path::Path;
use std::time::Instant;

use image::RgbImage;
use ndarray::Array2;

use crate::config::DetectorConfig;
use crate::error::DetectError;
use crate::image_proc::{
    adaptive_mean_threshold, draw_detections, elliptical_kernel, extract_foreground,
    gaussian_blur, open, rescale_intensity, rgb_to_gray, Detection,
};

/// Output of a pipeline run: the detections in raster order and the
/// original image annotated with a marker per detection.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// Foreground pixels in raster scan order.
    pub stars: Vec<Detection>,
    /// Original image with a green marker drawn at every detection.
    pub annotated: RgbImage,
}

/// The named intermediate images of one pipeline run, in stage order.
///
/// Purely for inspection and rendering; holding or dropping these has no
/// effect on the detection result.
#[derive(Debug, Clone)]
pub struct PipelineStages {
    /// Decoded input image.
    pub original: RgbImage,
    /// BT.601 grayscale conversion of the input.
    pub grayscale: Array2<u8>,
    /// Contrast and brightness enhanced image.
    pub enhanced: Array2<u8>,
    /// Gaussian blurred image.
    pub blurred: Array2<u8>,
    /// Inverted adaptive threshold mask.
    pub thresholded: Array2<u8>,
    /// Mask after morphological opening; detections are read from here.
    pub opened: Array2<u8>,
}

/// Detect stars in the image at `path`.
///
/// # Arguments
/// * `path` - Path to a decodable raster image (PNG, JPEG, ...)
/// * `config` - Pipeline parameters
///
/// # Errors
/// * [`DetectError::Read`] if the path cannot be decoded
/// * [`DetectError::InvalidConfig`] if `config` violates its constraints
pub fn detect_stars<P: AsRef<Path>>(
    path: P,
    config: &DetectorConfig,
) -> Result<DetectionResult, DetectError> {
    let (result, _stages) = detect_stars_with_stages(path, config)?;
    Ok(result)
}

/// Detect stars and additionally return the intermediate stage images so
/// the caller can render the processing steps.
///
/// The returned result is identical to [`detect_stars`] for the same
/// input and configuration.
pub fn detect_stars_with_stages<P: AsRef<Path>>(
    path: P,
    config: &DetectorConfig,
) -> Result<(DetectionResult, PipelineStages), DetectError> {
    config.validate()?;

    let path = path.as_ref();
    let original = image::open(path)
        .map_err(|source| DetectError::read(path, source))?
        .to_rgb8();

    Ok(run_pipeline(original, config))
}

/// Run the pipeline on an already decoded image.
///
/// # Errors
/// * [`DetectError::InvalidConfig`] if `config` violates its constraints
pub fn detect_in_image(
    image: &RgbImage,
    config: &DetectorConfig,
) -> Result<(DetectionResult, PipelineStages), DetectError> {
    config.validate()?;
    Ok(run_pipeline(image.clone(), config))
}

fn run_pipeline(original: RgbImage, config: &DetectorConfig) -> (DetectionResult, PipelineStages) {
    let start = Instant::now();

    let grayscale = rgb_to_gray(&original);
    let enhanced = rescale_intensity(&grayscale, config.alpha, config.beta);
    let blurred = gaussian_blur(&enhanced, config.blur_kernel_size);
    let thresholded = adaptive_mean_threshold(&blurred, config.block_size, config.c);
    let kernel = elliptical_kernel(config.morph_kernel_size);
    let opened = open(&thresholded, &kernel);

    let stars = extract_foreground(&opened);
    let annotated = draw_detections(&original, &stars);

    log::debug!(
        "star detection: size={}x{}, duration={:.3}ms, stars_found={}",
        original.width(),
        original.height(),
        start.elapsed().as_secs_f64() * 1000.0,
        stars.len()
    );
    log::trace!("star positions: {:?}", stars);

    (
        DetectionResult { stars, annotated },
        PipelineStages {
            original,
            grayscale,
            enhanced,
            blurred,
            thresholded,
            opened,
        },
    )
}
