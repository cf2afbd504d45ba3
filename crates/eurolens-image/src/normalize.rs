//! Resize and encode operations.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::ImageError;

/// Loads an image from disk, decoding by content signature.
///
/// # Errors
///
/// Returns [`ImageError::Decode`] if the file cannot be opened or is not a
/// decodable image.
pub fn load_from_path(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Scales `image` down so its longest side equals `max_dimension`, keeping
/// the aspect ratio. Images already within the cap are returned unchanged;
/// this never upscales.
#[must_use]
pub fn resize_to_fit(image: &DynamicImage, max_dimension: u32) -> DynamicImage {
    let longest = image.width().max(image.height());
    if longest <= max_dimension {
        return image.clone();
    }
    image.resize(max_dimension, max_dimension, FilterType::Lanczos3)
}

/// Encodes `image` as a lossy JPEG at `quality` (in `0..=1`) and returns the
/// standard-base64 payload the analysis endpoint expects.
///
/// # Errors
///
/// - [`ImageError::InvalidQuality`] if `quality` is non-finite or outside `0..=1`.
/// - [`ImageError::EmptyImage`] if either dimension is zero.
/// - [`ImageError::Encode`] if the JPEG codec fails.
pub fn encode_jpeg_base64(image: &DynamicImage, quality: f32) -> Result<String, ImageError> {
    if !quality.is_finite() || !(0.0..=1.0).contains(&quality) {
        return Err(ImageError::InvalidQuality(quality));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(ImageError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    // The codec takes 1..=100; quality 0.0 still has to produce data.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let codec_quality = (quality * 100.0).round().clamp(1.0, 100.0) as u8;

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, codec_quality);
    // JPEG has no alpha channel; flatten before encoding.
    image
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(ImageError::Encode)?;

    Ok(BASE64.encode(buffer))
}
