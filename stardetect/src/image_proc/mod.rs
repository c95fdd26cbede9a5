//! Image processing stages for star detection.
//!
//! Each stage is a pure transform over single-channel `ndarray` buffers,
//! taking the previous stage's output and producing a fresh array. The
//! pipeline module wires them together in a fixed order.

pub mod annotate;
pub mod convolve;
pub mod detection;
pub mod enhance;
pub mod grayscale;
pub mod morphology;
pub mod threshold;

// Re-export key functionality for easier access
pub use annotate::draw_detections;
pub use convolve::{gaussian_blur, gaussian_kernel_1d, sigma_for_kernel_size};
pub use detection::{extract_foreground, Detection};
pub use enhance::rescale_intensity;
pub use grayscale::{array2_to_gray_image, rgb_to_gray};
pub use morphology::{dilate, elliptical_kernel, erode, open};
pub use threshold::adaptive_mean_threshold;
