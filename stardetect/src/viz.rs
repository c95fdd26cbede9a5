//! Presentational rendering of pipeline stages.
//!
//! Nothing here feeds back into detection; these helpers exist so tools
//! can show the processing steps side by side, the way an interactive
//! session would.

use std::error::Error;
use std::path::Path;

use image::{DynamicImage, RgbImage};

use crate::image_proc::array2_to_gray_image;
use crate::pipeline::PipelineStages;

/// Stage names in pipeline order, used for file naming.
const STAGE_NAMES: [&str; 6] = [
    "original",
    "grayscale",
    "enhanced",
    "blurred",
    "thresholded",
    "opened",
];

fn stage_panels(stages: &PipelineStages) -> [RgbImage; 6] {
    let gray = |arr: &ndarray::Array2<u8>| DynamicImage::ImageLuma8(array2_to_gray_image(arr)).to_rgb8();
    [
        stages.original.clone(),
        gray(&stages.grayscale),
        gray(&stages.enhanced),
        gray(&stages.blurred),
        gray(&stages.thresholded),
        gray(&stages.opened),
    ]
}

/// Compose the six stage images into a single 3x2 grid image.
///
/// Panels appear in pipeline order, three per row: original, grayscale,
/// enhanced on top; blurred, thresholded, opened below.
///
/// # Arguments
/// * `stages` - Intermediate images from a pipeline run
///
/// # Returns
/// * An `RgbImage` of three panel widths by two panel heights
pub fn stage_montage(stages: &PipelineStages) -> RgbImage {
    let panels = stage_panels(stages);
    let (width, height) = stages.original.dimensions();

    let mut montage = RgbImage::new(width * 3, height * 2);

    for (index, panel) in panels.iter().enumerate() {
        let origin_x = (index as u32 % 3) * width;
        let origin_y = (index as u32 / 3) * height;
        for (x, y, pixel) in panel.enumerate_pixels() {
            montage.put_pixel(origin_x + x, origin_y + y, *pixel);
        }
    }

    montage
}

/// Write each stage as an individual PNG into `dir`.
///
/// Files are named after the stage (`original.png`, `grayscale.png`, ...).
/// The directory is created if it does not exist.
///
/// # Arguments
/// * `stages` - Intermediate images from a pipeline run
/// * `dir` - Output directory
pub fn save_stages<P: AsRef<Path>>(stages: &PipelineStages, dir: P) -> Result<(), Box<dyn Error>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    for (panel, name) in stage_panels(stages).iter().zip(STAGE_NAMES) {
        panel.save(dir.join(format!("{}.png", name)))?;
    }

    Ok(())
}
