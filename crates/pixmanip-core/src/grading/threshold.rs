//! Median-luminance black/white threshold.
//!
//! A two-phase pass:
//! 1. Snapshot the luminance of every pixel and sort the population.
//! 2. With the median fixed, map each pixel to black (`luminance < median`)
//!    or white (`luminance >= median`).
//!
//! The median is the element at index `N / 2` of the sorted population,
//! i.e. the upper median for even `N`.
//!
//! # Complexity
//! O(N log N), dominated by the sort. Both per-pixel phases are parallel.

use rayon::prelude::*;

use crate::color::Rgb;
use crate::image::Raster;

/// Luminance of every pixel, in row-major order.
pub fn luminance_population(image: &Raster) -> Vec<f64> {
    image.pixels().par_iter().map(|px| px.luminance()).collect()
}

/// Upper-median luminance of the image, or `None` for an empty image.
pub fn median_luminance(image: &Raster) -> Option<f64> {
    let mut population = luminance_population(image);
    if population.is_empty() {
        return None;
    }
    population.par_sort_unstable_by(f64::total_cmp);
    Some(population[population.len() / 2])
}

/// Black or white depending on the pixel's luminance relative to `threshold`.
/// Ties go to white.
pub fn threshold_pixel(px: Rgb, threshold: f64) -> Rgb {
    if px.luminance() < threshold {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Binarize the image around its median luminance.
///
/// An empty image has no median and is returned unchanged.
pub fn median_threshold(mut image: Raster) -> Raster {
    let Some(median) = median_luminance(&image) else {
        return image;
    };
    tracing::debug!(
        "median threshold {}x{} at luminance {median:.3}",
        image.width(),
        image.height()
    );
    image.map_pixels(|px| threshold_pixel(px, median));
    image
}
