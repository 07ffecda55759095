//! Fixed per-pixel tone transforms: grayscale, invert, sepia, warm.
//!
//! Each transform is available as a pure pixel function (`*_pixel`) and as
//! an image operation that rewrites every pixel of an owned [`Raster`].

use crate::color::Rgb;
use crate::image::Raster;

/// Sepia tone matrix, rows produce R', G', B'.
///
/// ```text
/// R' = .393R + .769G + .189B
/// G' = .349R + .686G + .168B
/// B' = .272R + .534G + .131B
/// ```
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Red gain of the warm shift.
pub const WARM_RED_GAIN: f64 = 1.2;

/// Blue divisor of the warm shift.
pub const WARM_BLUE_DIVISOR: f64 = 1.5;

/// Average the channels with integer division: `R = G = B = (R + G + B) / 3`.
pub fn grayscale_pixel(px: Rgb) -> Rgb {
    let avg = ((px.r as u16 + px.g as u16 + px.b as u16) / 3) as u8;
    Rgb::new(avg, avg, avg)
}

/// `255 − channel` on every channel. Applying it twice is the identity.
pub fn invert_pixel(px: Rgb) -> Rgb {
    Rgb::new(255 - px.r, 255 - px.g, 255 - px.b)
}

/// Apply the sepia matrix, truncating each result and clamping to 255.
pub fn sepia_pixel(px: Rgb) -> Rgb {
    let rgb = px.to_channels_f64();
    let mut out = [0.0_f64; 3];
    for (c, row) in SEPIA.iter().enumerate() {
        out[c] = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
    }
    Rgb::from_channels_f64(out)
}

/// Warm shift in floating point: `R × 1.2`, `G`, `B / 1.5`.
///
/// Shared with the compositing stage, which applies it before truncation.
pub fn warm_channels(rgb: [f64; 3]) -> [f64; 3] {
    [rgb[0] * WARM_RED_GAIN, rgb[1], rgb[2] / WARM_BLUE_DIVISOR]
}

/// Warm shift on one pixel, truncated and clamped.
pub fn warm_pixel(px: Rgb) -> Rgb {
    Rgb::from_channels_f64(warm_channels(px.to_channels_f64()))
}

pub fn grayscale(mut image: Raster) -> Raster {
    tracing::debug!("grayscale {}x{}", image.width(), image.height());
    image.map_pixels(grayscale_pixel);
    image
}

pub fn invert(mut image: Raster) -> Raster {
    tracing::debug!("invert {}x{}", image.width(), image.height());
    image.map_pixels(invert_pixel);
    image
}

/// Sepia tone. Channels that exceed 255 (bright, warm inputs) saturate.
pub fn sepia(mut image: Raster) -> Raster {
    tracing::debug!("sepia {}x{}", image.width(), image.height());
    image.map_pixels(sepia_pixel);
    image
}

pub fn warm(mut image: Raster) -> Raster {
    tracing::debug!("warm {}x{}", image.width(), image.height());
    image.map_pixels(warm_pixel);
    image
}
