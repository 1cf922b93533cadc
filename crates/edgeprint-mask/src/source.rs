//! Source image decoding.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces the RGBA
//! image the compositor works on. This keeps the crate sans-IO: file
//! and network access belong to the caller.

use image::RgbaImage;

use crate::types::MaskError;

/// Decode raw image bytes to RGBA.
///
/// Supports whatever formats the `image` crate is built with (PNG,
/// JPEG, BMP, WebP here).
///
/// # Errors
///
/// Returns [`MaskError::EmptyInput`] if `bytes` is empty.
/// Returns [`MaskError::ImageDecode`] if the format is unrecognized or
/// the data is corrupt.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, MaskError> {
    if bytes.is_empty() {
        return Err(MaskError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgba8())
}
