//! Owned raster container shared by every transform.

use rayon::prelude::*;

use crate::color::Rgb;
use crate::error::TransformError;

/// Pixel count above which per-pixel passes are split across the rayon pool.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// Pixels handed to one rayon task.
const CHUNK_PIXELS: usize = 4096;

/// A width × height grid of [`Rgb`] pixels stored row-major.
///
/// Dimensions never change after construction. Transforms that keep the
/// dimensions rewrite the pixels in place; transforms that change them
/// build a new `Raster`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Create a black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create an image with every pixel set to `rgb`.
    pub fn filled(width: u32, height: u32, rgb: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgb; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major pixel buffer.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, TransformError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TransformError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels, `width × height`.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` outside the grid.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Overwrite the pixel at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the image.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgb: Rgb) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        let idx = self.index(x, y);
        self.pixels[idx] = rgb;
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed `RGBRGB…` bytes, borrowed without copying.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Rewrite every pixel with `f`.
    ///
    /// Each pixel is visited exactly once and `f` only ever sees that pixel's
    /// current value, so large images are processed in parallel.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Rgb) -> Rgb + Sync + Send,
    {
        if self.pixels.len() >= PARALLEL_THRESHOLD {
            self.pixels.par_chunks_mut(CHUNK_PIXELS).for_each(|chunk| {
                for px in chunk.iter_mut() {
                    *px = f(*px);
                }
            });
        } else {
            for px in self.pixels.iter_mut() {
                *px = f(*px);
            }
        }
    }

    /// Same as [`map_pixels`](Self::map_pixels) but `f` also receives the
    /// pixel's row-major index.
    pub(crate) fn map_pixels_indexed<F>(&mut self, f: F)
    where
        F: Fn(usize, Rgb) -> Rgb + Sync + Send,
    {
        if self.pixels.len() >= PARALLEL_THRESHOLD {
            self.pixels
                .par_chunks_mut(CHUNK_PIXELS)
                .enumerate()
                .for_each(|(chunk_idx, chunk)| {
                    let base = chunk_idx * CHUNK_PIXELS;
                    for (offset, px) in chunk.iter_mut().enumerate() {
                        *px = f(base + offset, *px);
                    }
                });
        } else {
            for (idx, px) in self.pixels.iter_mut().enumerate() {
                *px = f(idx, *px);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black_with_requested_size() {
        let img = Raster::new(3, 2);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.len(), 6);
        assert!(img.pixels().iter().all(|px| *px == Rgb::BLACK));
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let err = Raster::from_pixels(2, 2, vec![Rgb::WHITE; 3]).unwrap_err();
        assert!(matches!(
            err,
            TransformError::BufferSize { expected: 4, actual: 3, .. }
        ));
    }

    #[test]
    fn test_pixel_addressing_is_column_row() {
        let mut img = Raster::new(3, 2);
        img.put_pixel(2, 1, Rgb::new(1, 2, 3));
        assert_eq!(img.pixel(2, 1), Some(Rgb::new(1, 2, 3)));
        assert_eq!(img.pixels()[5], Rgb::new(1, 2, 3));
        assert_eq!(img.pixel(3, 0), None);
        assert_eq!(img.pixel(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_put_pixel_out_of_bounds_panics() {
        let mut img = Raster::new(1, 1);
        img.put_pixel(1, 0, Rgb::WHITE);
    }

    #[test]
    fn test_as_bytes_is_packed_rgb() {
        let img = Raster::from_pixels(2, 1, vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]).unwrap();
        assert_eq!(img.as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_map_pixels_parallel_path_visits_every_pixel() {
        // 512×256 crosses the parallel threshold.
        let mut img = Raster::filled(512, 256, Rgb::new(10, 20, 30));
        img.map_pixels(|px| Rgb::new(px.r + 1, px.g, px.b));
        assert!(img.pixels().iter().all(|px| px.r == 11));
    }

    #[test]
    fn test_map_pixels_indexed_passes_row_major_index() {
        let mut img = Raster::new(300, 300);
        img.map_pixels_indexed(|idx, _| Rgb::new((idx % 256) as u8, 0, 0));
        assert_eq!(img.pixel(5, 0).unwrap().r, 5);
        // Row 1 starts at index 300 → 300 % 256 = 44.
        assert_eq!(img.pixel(0, 1).unwrap().r, 44);
    }
}
