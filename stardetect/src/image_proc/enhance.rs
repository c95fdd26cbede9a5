//! Linear contrast and brightness enhancement.

use ndarray::Array2;

/// Rescale pixel intensities by `v * alpha + beta`, rounding and clamping
/// the result to the 8-bit range.
///
/// `alpha` greater than 1 stretches contrast, `beta` shifts brightness.
/// Used to lift faint stars above the background before thresholding.
///
/// # Arguments
/// * `image` - Input grayscale image
/// * `alpha` - Contrast gain
/// * `beta` - Brightness offset
///
/// # Returns
/// * A new `Array2<u8>` with rescaled values
pub fn rescale_intensity(image: &Array2<u8>, alpha: f64, beta: f64) -> Array2<u8> {
    image.mapv(|v| (v as f64 * alpha + beta).round().clamp(0.0, 255.0) as u8)
}
