//! Gaussian smoothing via separable convolution.
//!
//! Edge pixels are handled by replicating the border, so a flat image
//! stays exactly flat through the blur.

use ndarray::Array2;

/// Derive the Gaussian standard deviation from an odd kernel size using
/// the conventional formula `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
///
/// For the default 5x5 kernel this yields sigma = 1.1.
pub fn sigma_for_kernel_size(size: usize) -> f64 {
    0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build a normalized 1D Gaussian kernel.
///
/// # Arguments
/// * `size` - Kernel length (odd)
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// * Vector of `size` weights summing to 1
pub fn gaussian_kernel_1d(size: usize, sigma: f64) -> Vec<f64> {
    let radius = (size / 2) as isize;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|d| (-((d * d) as f64) / denom).exp())
        .collect();

    let sum: f64 = kernel.iter().sum();
    for w in kernel.iter_mut() {
        *w /= sum;
    }

    kernel
}

/// Smooth an image with a `size` x `size` Gaussian kernel, sigma derived
/// from the kernel size.
///
/// The 2D Gaussian is separable, so this runs one horizontal and one
/// vertical pass. Samples outside the image replicate the nearest edge
/// pixel. Output values are rounded back to u8 after the second pass.
///
/// # Arguments
/// * `image` - Input grayscale image
/// * `size` - Kernel side length (odd)
///
/// # Returns
/// * Blurred image with the same dimensions
pub fn gaussian_blur(image: &Array2<u8>, size: usize) -> Array2<u8> {
    let kernel = gaussian_kernel_1d(size, sigma_for_kernel_size(size));
    let radius = (size / 2) as isize;
    let (height, width) = image.dim();

    // Horizontal pass, kept in float space until the final rounding
    let mut horizontal = Array2::<f64>::zeros((height, width));
    for row in 0..height {
        for col in 0..width {
            let mut acc = 0.0;
            for (i, &weight) in kernel.iter().enumerate() {
                let sample = (col as isize + i as isize - radius).clamp(0, width as isize - 1);
                acc += weight * image[[row, sample as usize]] as f64;
            }
            horizontal[[row, col]] = acc;
        }
    }

    // Vertical pass
    Array2::from_shape_fn((height, width), |(row, col)| {
        let mut acc = 0.0;
        for (i, &weight) in kernel.iter().enumerate() {
            let sample = (row as isize + i as isize - radius).clamp(0, height as isize - 1);
            acc += weight * horizontal[[sample as usize, col]];
        }
        acc.round().clamp(0.0, 255.0) as u8
    })
}
