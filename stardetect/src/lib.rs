//! Star detection for night-sky images.
//!
//! This crate locates bright point-like features in a photograph using a
//! fixed image processing pipeline: grayscale conversion, linear contrast
//! enhancement, Gaussian denoising, inverted adaptive mean thresholding,
//! morphological opening, and raster-order extraction of foreground pixels.
//! The original image is returned annotated with a marker per detection,
//! and the intermediate stage images can be exposed for rendering.

pub mod config;
pub mod error;
pub mod image_proc;
pub mod pipeline;
pub mod viz;

pub use config::DetectorConfig;
pub use error::DetectError;
pub use image_proc::detection::Detection;
pub use pipeline::{
    detect_in_image, detect_stars, detect_stars_with_stages, DetectionResult, PipelineStages,
};
