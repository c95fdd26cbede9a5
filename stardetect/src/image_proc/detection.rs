//! Detection type and foreground coordinate extraction.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// One foreground pixel in the final binary mask.
///
/// Coordinates follow array convention: `row` counts down from the top,
/// `col` counts right from the left. For drawing, `(x, y)` is
/// `(col, row)`; the [`x`](Detection::x) and [`y`](Detection::y) accessors
/// make that mapping explicit.
///
/// Adjacent foreground pixels are not merged: a single star blob yields
/// one detection per pixel. Callers wanting one entry per star need to
/// cluster the output themselves; this is a known limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Row of the pixel (vertical, top down).
    pub row: usize,
    /// Column of the pixel (horizontal, left to right).
    pub col: usize,
}

impl Detection {
    /// Horizontal drawing coordinate.
    pub fn x(&self) -> usize {
        self.col
    }

    /// Vertical drawing coordinate.
    pub fn y(&self) -> usize {
        self.row
    }
}

/// Collect every foreground pixel of a binary mask in raster order
/// (ascending row, then ascending column within a row).
///
/// # Arguments
/// * `mask` - Binary mask with foreground pixels at 255
///
/// # Returns
/// * Detections in raster scan order
pub fn extract_foreground(mask: &Array2<u8>) -> Vec<Detection> {
    let mut detections = Vec::new();

    for ((row, col), &value) in mask.indexed_iter() {
        if value == 255 {
            detections.push(Detection { row, col });
        }
    }

    detections
}
