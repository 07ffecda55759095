//! Quarter-turn rotation.
//!
//! Rotation changes the image's dimensions, so it always builds a new
//! [`Raster`] and drops the source. Pixel values are moved, never altered.

use crate::image::Raster;

/// Rotate 90° clockwise.
///
/// For a `W × H` source the result is `H × W` and
/// `dest(H − 1 − y, x) = src(x, y)`: the source's top row becomes the
/// destination's right-most column. Empty images stay empty with their
/// dimensions swapped.
pub fn rotate_clockwise(image: Raster) -> Raster {
    let (width, height) = image.dimensions();
    tracing::debug!("rotate clockwise {width}x{height} -> {height}x{width}");

    let mut rotated = Raster::new(height, width);
    for (idx, px) in image.pixels().iter().enumerate() {
        let x = (idx % width as usize) as u32;
        let y = (idx / width as usize) as u32;
        rotated.put_pixel(height - 1 - y, x, *px);
    }
    rotated
}

/// Rotate clockwise by `turns` quarter turns. Turns are taken modulo 4.
pub fn rotate_clockwise_turns(image: Raster, turns: u32) -> Raster {
    (0..turns % 4).fold(image, |img, _| rotate_clockwise(img))
}
