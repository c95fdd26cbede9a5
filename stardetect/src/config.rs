//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// Tunable parameters for the star detection pipeline.
///
/// Every field has a sensible default for typical night-sky photographs;
/// raising `c` or the kernel sizes makes detection stricter, raising
/// `alpha`/`beta` lifts faint sources above the local background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Contrast gain applied to the grayscale image (output = v * alpha + beta).
    pub alpha: f64,
    /// Brightness offset applied together with `alpha`.
    pub beta: f64,
    /// Side length of the Gaussian denoising kernel (odd).
    pub blur_kernel_size: usize,
    /// Side length of the adaptive threshold neighborhood (odd, > 1).
    pub block_size: usize,
    /// Constant subtracted from the local mean; larger values detect fewer pixels.
    pub c: f64,
    /// Side length of the elliptical structuring element used for opening.
    pub morph_kernel_size: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            alpha: 1.5,
            beta: 30.0,
            blur_kernel_size: 5,
            block_size: 11,
            c: 5.0,
            morph_kernel_size: 3,
        }
    }
}

impl DetectorConfig {
    /// Check parameter constraints, failing fast on values the numeric
    /// stages are not defined for.
    pub fn validate(&self) -> Result<(), DetectError> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(DetectError::InvalidConfig(format!(
                "alpha must be finite and positive, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() {
            return Err(DetectError::InvalidConfig(format!(
                "beta must be finite, got {}",
                self.beta
            )));
        }
        if self.blur_kernel_size % 2 == 0 {
            return Err(DetectError::InvalidConfig(format!(
                "blur_kernel_size must be odd, got {}",
                self.blur_kernel_size
            )));
        }
        if self.block_size <= 1 || self.block_size % 2 == 0 {
            return Err(DetectError::InvalidConfig(format!(
                "block_size must be odd and greater than 1, got {}",
                self.block_size
            )));
        }
        if !self.c.is_finite() {
            return Err(DetectError::InvalidConfig(format!(
                "c must be finite, got {}",
                self.c
            )));
        }
        if self.morph_kernel_size == 0 {
            return Err(DetectError::InvalidConfig(
                "morph_kernel_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
