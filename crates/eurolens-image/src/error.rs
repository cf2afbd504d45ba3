use std::path::PathBuf;

use thiserror::Error;

/// Errors from image normalization.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to decode image at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The JPEG codec could not produce data for this image.
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("JPEG quality must be in 0..=1, got {0}")]
    InvalidQuality(f32),

    /// Zero-width or zero-height images cannot be encoded.
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}
