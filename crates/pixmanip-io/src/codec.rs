//! Raster decoding and encoding.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use pixmanip_core::{Raster, Rgb};

use crate::error::IoError;

/// Load an image from disk as 8-bit RGB.
///
/// Any format the `image` crate can decode is accepted; alpha is discarded
/// and higher bit depths are reduced to 8 bits per channel.
pub fn load_image(path: &Path) -> Result<Raster, IoError> {
    let decoded = image::open(path).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::info!("loaded {} ({width}x{height})", path.display());
    raster_from_rgb_image(&rgb)
}

/// Save an image, choosing the format from the path's extension.
///
/// The extension is the text after the final `.` of the file name and is
/// matched case-insensitively (`png`, `jpg`/`jpeg`, `bmp`, `tiff`, …).
pub fn save_image(image: &Raster, path: &Path) -> Result<(), IoError> {
    let format = format_for_path(path)?;
    let (width, height) = image.dimensions();
    raster_to_rgb_image(image)
        .save_with_format(path, format)
        .map_err(|source| IoError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("saved {} ({width}x{height}, {format:?})", path.display());
    Ok(())
}

/// Resolve the output format from the destination path's extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat, IoError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| IoError::MissingExtension(path.to_path_buf()))?;
    ImageFormat::from_extension(ext).ok_or_else(|| IoError::UnsupportedExtension(ext.to_string()))
}

/// Convert an `image` RGB buffer into a [`Raster`] without re-decoding.
pub fn raster_from_rgb_image(rgb: &RgbImage) -> Result<Raster, IoError> {
    let (width, height) = rgb.dimensions();
    let pixels: Vec<Rgb> = bytemuck::cast_slice(rgb.as_raw().as_slice()).to_vec();
    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Convert a [`Raster`] into an `image` RGB buffer.
pub fn raster_to_rgb_image(raster: &Raster) -> RgbImage {
    let (width, height) = raster.dimensions();
    let mut out = RgbImage::new(width, height);
    out.copy_from_slice(raster.as_bytes());
    out
}
