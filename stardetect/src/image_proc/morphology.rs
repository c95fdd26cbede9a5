//! Binary morphology for mask cleanup.
//!
//! Opening (erosion then dilation) removes isolated noise pixels from the
//! thresholded mask while preserving the shape of larger star blobs.

use ndarray::Array2;

/// Build an elliptical structuring element of the given side length.
///
/// Each row spans the horizontal extent of the inscribed ellipse at that
/// row's vertical offset. The 3x3 element degenerates to the plus shape.
///
/// # Arguments
/// * `size` - Side length of the square element (>= 1)
///
/// # Returns
/// * `Array2<u8>` with 1 inside the ellipse and 0 outside
pub fn elliptical_kernel(size: usize) -> Array2<u8> {
    let mut kernel = Array2::<u8>::zeros((size, size));
    let center = (size / 2) as isize;
    let r = center as f64;

    for row in 0..size {
        let dy = row as isize - center;
        let dx = if r > 0.0 {
            (r * r - (dy * dy) as f64).max(0.0).sqrt().round() as isize
        } else {
            0
        };
        let col_start = (center - dx).max(0) as usize;
        let col_end = ((center + dx) as usize).min(size - 1);
        for col in col_start..=col_end {
            kernel[[row, col]] = 1;
        }
    }

    kernel
}

/// Erode a binary mask: a pixel survives only if every in-bounds sample
/// under the structuring element is foreground.
///
/// Samples falling outside the image do not constrain the result, so
/// foreground touching the border is not eaten away artificially.
pub fn erode(mask: &Array2<u8>, kernel: &Array2<u8>) -> Array2<u8> {
    let (height, width) = mask.dim();
    let (k_height, k_width) = kernel.dim();
    let anchor_y = (k_height / 2) as isize;
    let anchor_x = (k_width / 2) as isize;

    Array2::from_shape_fn((height, width), |(row, col)| {
        for ky in 0..k_height {
            for kx in 0..k_width {
                if kernel[[ky, kx]] == 0 {
                    continue;
                }
                let y = row as isize + ky as isize - anchor_y;
                let x = col as isize + kx as isize - anchor_x;
                if y < 0 || y >= height as isize || x < 0 || x >= width as isize {
                    continue;
                }
                if mask[[y as usize, x as usize]] != 255 {
                    return 0;
                }
            }
        }
        255
    })
}

/// Dilate a binary mask: a pixel becomes foreground if any in-bounds
/// sample under the structuring element is foreground.
pub fn dilate(mask: &Array2<u8>, kernel: &Array2<u8>) -> Array2<u8> {
    let (height, width) = mask.dim();
    let (k_height, k_width) = kernel.dim();
    let anchor_y = (k_height / 2) as isize;
    let anchor_x = (k_width / 2) as isize;

    Array2::from_shape_fn((height, width), |(row, col)| {
        for ky in 0..k_height {
            for kx in 0..k_width {
                if kernel[[ky, kx]] == 0 {
                    continue;
                }
                let y = row as isize + ky as isize - anchor_y;
                let x = col as isize + kx as isize - anchor_x;
                if y < 0 || y >= height as isize || x < 0 || x >= width as isize {
                    continue;
                }
                if mask[[y as usize, x as usize]] == 255 {
                    return 255;
                }
            }
        }
        0
    })
}

/// One iteration of morphological opening: erosion followed by dilation.
pub fn open(mask: &Array2<u8>, kernel: &Array2<u8>) -> Array2<u8> {
    dilate(&erode(mask, kernel), kernel)
}
