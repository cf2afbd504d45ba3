//! Image normalization for analysis requests.
//!
//! Captured photos are arbitrarily large; the classification service wants a
//! bounded-size base64 JPEG. This crate downscales (never upscales) to a
//! longest-side cap and encodes at a caller-chosen quality.

pub mod error;
pub mod normalize;

pub use error::ImageError;
pub use normalize::{encode_jpeg_base64, load_from_path, resize_to_fit};
