//! Multi-source compositing.
//!
//! A primary image is blended with overlays of identical dimensions through
//! a sequence of weighted sums. Accumulation stays in `f64` across all stages;
//! the result is truncated and clamped to 8 bits once, on write.
//!
//! The fixed vignette/grain filter is:
//! ```text
//! blended = 0.65 × primary + 0.35 × halo
//! final   = 0.95 × blended + 0.05 × grain
//! out     = (final.r × 1.2, final.g, final.b / 1.5)
//! ```

use crate::color::Rgb;
use crate::error::TransformError;
use crate::grading::tone::warm_channels;
use crate::image::Raster;

/// Weight of the primary image in the halo stage.
pub const HALO_BASE_WEIGHT: f64 = 0.65;
/// Weight of the halo overlay.
pub const HALO_OVERLAY_WEIGHT: f64 = 0.35;
/// Weight of the running blend in the grain stage.
pub const GRAIN_BASE_WEIGHT: f64 = 0.95;
/// Weight of the grain overlay.
pub const GRAIN_OVERLAY_WEIGHT: f64 = 0.05;

/// One weighted-sum stage: `acc = base_weight × acc + overlay_weight × overlay`.
#[derive(Debug, Clone, Copy)]
pub struct BlendStage<'a> {
    /// Name used in dimension-mismatch errors.
    pub role: &'static str,
    pub overlay: &'a Raster,
    pub base_weight: f64,
    pub overlay_weight: f64,
}

impl<'a> BlendStage<'a> {
    pub fn new(role: &'static str, overlay: &'a Raster, base_weight: f64, overlay_weight: f64) -> Self {
        Self {
            role,
            overlay,
            base_weight,
            overlay_weight,
        }
    }

    fn apply(&self, acc: [f64; 3], idx: usize) -> [f64; 3] {
        let over = self.overlay.pixels()[idx].to_channels_f64();
        [
            self.base_weight * acc[0] + self.overlay_weight * over[0],
            self.base_weight * acc[1] + self.overlay_weight * over[1],
            self.base_weight * acc[2] + self.overlay_weight * over[2],
        ]
    }
}

/// The two overlays consumed by [`vignette_grain`], already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlays {
    /// Dark-edged vignette ("halo").
    pub halo: Raster,
    /// Decorative film grain texture.
    pub grain: Raster,
}

impl Overlays {
    pub fn new(halo: Raster, grain: Raster) -> Self {
        Self { halo, grain }
    }

    /// Blend stages of the vignette/grain filter, in application order.
    pub fn stages(&self) -> [BlendStage<'_>; 2] {
        [
            BlendStage::new("halo", &self.halo, HALO_BASE_WEIGHT, HALO_OVERLAY_WEIGHT),
            BlendStage::new("grain", &self.grain, GRAIN_BASE_WEIGHT, GRAIN_OVERLAY_WEIGHT),
        ]
    }
}

/// Blend `primary` through `stages` in order.
///
/// Every overlay must have exactly the primary's dimensions.
pub fn composite(primary: Raster, stages: &[BlendStage<'_>]) -> Result<Raster, TransformError> {
    composite_with(primary, stages, |rgb| rgb)
}

/// The vignette/grain filter: halo blend, grain blend, then the warm shift.
pub fn vignette_grain(primary: Raster, overlays: &Overlays) -> Result<Raster, TransformError> {
    composite_with(primary, &overlays.stages(), warm_channels)
}

fn composite_with(
    mut primary: Raster,
    stages: &[BlendStage<'_>],
    finish: fn([f64; 3]) -> [f64; 3],
) -> Result<Raster, TransformError> {
    for stage in stages {
        check_dimensions(&primary, stage)?;
    }
    tracing::debug!(
        "composite {}x{} with {} stage(s)",
        primary.width(),
        primary.height(),
        stages.len()
    );

    primary.map_pixels_indexed(|idx, px| {
        let mut acc = px.to_channels_f64();
        for stage in stages {
            acc = stage.apply(acc, idx);
        }
        Rgb::from_channels_f64(finish(acc))
    });
    Ok(primary)
}

fn check_dimensions(primary: &Raster, stage: &BlendStage<'_>) -> Result<(), TransformError> {
    let (expected_width, expected_height) = primary.dimensions();
    let (actual_width, actual_height) = stage.overlay.dimensions();
    if (expected_width, expected_height) != (actual_width, actual_height) {
        return Err(TransformError::DimensionMismatch {
            role: stage.role,
            expected_width,
            expected_height,
            actual_width,
            actual_height,
        });
    }
    Ok(())
}
