//! Inverted adaptive mean thresholding.

use ndarray::Array2;

/// Binarize an image against its local mean.
///
/// For each pixel the mean over a `block_size` x `block_size` neighborhood
/// is computed (out-of-bounds samples replicate the nearest edge pixel)
/// and lowered by the constant `c`. Pixels strictly below that local
/// threshold become foreground (255), everything else background (0).
///
/// On a star field the neighborhood mean around a bright source is pulled
/// up, so the locally dim surround of each source crosses the threshold
/// while flat sky regions stay empty.
///
/// # Arguments
/// * `image` - Input grayscale image
/// * `block_size` - Neighborhood side length (odd, > 1)
/// * `c` - Constant subtracted from the local mean
///
/// # Returns
/// * Binary mask with values 0 or 255
pub fn adaptive_mean_threshold(image: &Array2<u8>, block_size: usize, c: f64) -> Array2<u8> {
    let radius = (block_size / 2) as isize;
    let (height, width) = image.dim();
    let samples = (block_size * block_size) as f64;

    Array2::from_shape_fn((height, width), |(row, col)| {
        let mut sum = 0.0;
        for dy in -radius..=radius {
            let y = (row as isize + dy).clamp(0, height as isize - 1) as usize;
            for dx in -radius..=radius {
                let x = (col as isize + dx).clamp(0, width as isize - 1) as usize;
                sum += image[[y, x]] as f64;
            }
        }
        let threshold = sum / samples - c;

        if (image[[row, col]] as f64) < threshold {
            255
        } else {
            0
        }
    })
}
