//! Grayscale conversion and array/image buffer interchange.

use image::{GrayImage, Luma, RgbImage};
use ndarray::Array2;

/// Convert an RGB image to a single-channel intensity array using the
/// ITU-R BT.601 luma weights.
///
/// Array indices are `[row, col]` while image coordinates are `(x, y)`,
/// so array dimensions come out as (height, width).
///
/// # Arguments
/// * `image` - 8-bit RGB input image
///
/// # Returns
/// * `Array2<u8>` of shape (height, width) holding the luma values
pub fn rgb_to_gray(image: &RgbImage) -> Array2<u8> {
    let (width, height) = image.dimensions();

    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        let [r, g, b] = image.get_pixel(col as u32, row as u32).0;
        let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
        luma.round().min(255.0) as u8
    })
}

/// Converts an `Array2<u8>` to an `image::GrayImage`.
///
/// The conversion uses a direct mapping where array indices `[y, x]` map to
/// pixel coordinates `(x, y)`. Note that array dimensions are
/// (height, width) while image dimensions are (width, height).
///
/// # Arguments
/// * `arr` - Reference to an `Array2<u8>` containing grayscale pixel values
///
/// # Returns
/// * A new `GrayImage` containing the same data as the input array
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();

    let mut img = GrayImage::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x as u32, y as u32, Luma([arr[[y, x]]]));
        }
    }

    img
}
