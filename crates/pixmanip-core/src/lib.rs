//! Pixmanip Core — pixel-level image transformations.
//!
//! This crate contains the color model, per-pixel tone and HSL adjustments,
//! the median-luminance threshold, multi-source compositing, and rotation.
//! No file I/O: images come in and go out as owned [`Raster`] values.

pub mod color;
pub mod composite;
pub mod error;
pub mod geometry;
pub mod grading;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use color::{Hsl, Rgb};
pub use composite::{BlendStage, Overlays};
pub use error::TransformError;
pub use image::Raster;
pub use transform::evaluate::{apply_adjustment, apply_recipe};
pub use transform::params::{Adjustment, Recipe};
