//! Decode and encode glue over the `image` crate.
//!
//! The codec is an external collaborator: decoding produces a
//! [`PixelBuffer`] and encoding consumes one. Any codec failure is
//! surfaced as a descriptive error and treated as fatal by the caller.

use crate::buffer::PixelBuffer;
use image::{RgbImage, RgbaImage};
use std::path::Path;

/// Decode an image file into an interleaved 8-bit buffer.
///
/// Sources with an alpha channel decode to 4 channels, everything else
/// to 3, so the channel count of the original survives the round trip.
pub fn load_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to load image {}: {e}", path.display()))?;

    if img.color().has_alpha() {
        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        PixelBuffer::from_raw(width as usize, height as usize, 4, rgba.into_raw())
    } else {
        let rgb = img.into_rgb8();
        let (width, height) = rgb.dimensions();
        PixelBuffer::from_raw(width as usize, height as usize, 3, rgb.into_raw())
    }
}

/// Encode a buffer to disk, inferring the format from the file extension.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    let width = buffer.width() as u32;
    let height = buffer.height() as u32;
    match buffer.channels() {
        3 => {
            let img = RgbImage::from_raw(width, height, buffer.data().to_vec())
                .ok_or_else(|| "Failed to create RGB image buffer".to_string())?;
            img.save(path)
                .map_err(|e| format!("Failed to save image {}: {e}", path.display()))
        }
        4 => {
            let img = RgbaImage::from_raw(width, height, buffer.data().to_vec())
                .ok_or_else(|| "Failed to create RGBA image buffer".to_string())?;
            img.save(path)
                .map_err(|e| format!("Failed to save image {}: {e}", path.display()))
        }
        other => Err(format!(
            "Unsupported channel count {other}: expected 3 (RGB) or 4 (RGBA)"
        )),
    }
}
