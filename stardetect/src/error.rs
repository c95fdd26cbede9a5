use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the star detection pipeline.
#[derive(Error, Debug)]
pub enum DetectError {
    /// The input path could not be decoded into an image.
    #[error("failed to read image {path:?}: {source}")]
    Read {
        /// Path that failed to decode.
        path: PathBuf,
        /// Underlying decode error.
        source: image::ImageError,
    },

    /// Configuration validation failure.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DetectError {
    /// Wrap an image decode failure with the offending path.
    pub fn read(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        DetectError::Read {
            path: path.into(),
            source,
        }
    }
}
