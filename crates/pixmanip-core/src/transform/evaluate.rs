//! Recipe evaluation — threads one owned image through an adjustment chain.

use crate::composite::{self, Overlays};
use crate::error::TransformError;
use crate::geometry;
use crate::grading::{hsl, threshold, tone};
use crate::image::Raster;
use crate::transform::params::{Adjustment, Recipe};

/// Apply a single adjustment.
///
/// `overlays` is only read by [`Adjustment::VignetteGrain`]; that step fails
/// with [`TransformError::MissingOverlays`] when it is `None`.
pub fn apply_adjustment(
    image: Raster,
    adjustment: &Adjustment,
    overlays: Option<&Overlays>,
) -> Result<Raster, TransformError> {
    let out = match *adjustment {
        Adjustment::Grayscale => tone::grayscale(image),
        Adjustment::Invert => tone::invert(image),
        Adjustment::Sepia => tone::sepia(image),
        Adjustment::Warm => tone::warm(image),
        Adjustment::Hue { degrees } => hsl::set_hue(image, degrees),
        Adjustment::Saturation { value } => hsl::set_saturation(image, value),
        Adjustment::Lightness { value } => hsl::set_lightness(image, value),
        Adjustment::MedianThreshold => threshold::median_threshold(image),
        Adjustment::Rotate { turns } => geometry::rotate_clockwise_turns(image, turns),
        Adjustment::VignetteGrain => {
            let overlays = overlays.ok_or(TransformError::MissingOverlays(adjustment.label()))?;
            composite::vignette_grain(image, overlays)?
        }
    };
    Ok(out)
}

/// Apply every step of `recipe` in order.
pub fn apply_recipe(
    image: Raster,
    recipe: &Recipe,
    overlays: Option<&Overlays>,
) -> Result<Raster, TransformError> {
    if recipe.needs_overlays() && overlays.is_none() {
        // Fail before doing any work.
        return Err(TransformError::MissingOverlays(
            Adjustment::VignetteGrain.label(),
        ));
    }

    let (width, height) = image.dimensions();
    tracing::debug!("applying {} step(s) to {width}x{height}", recipe.steps.len());

    recipe
        .steps
        .iter()
        .try_fold(image, |img, step| apply_adjustment(img, step, overlays))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn sample() -> Raster {
        Raster::from_pixels(
            2,
            1,
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_recipe_is_identity() {
        let out = apply_recipe(sample(), &Recipe::default(), None).unwrap();
        assert_eq!(out, sample());
    }

    #[test]
    fn test_steps_apply_in_order() {
        let recipe = Recipe::new(vec![Adjustment::Invert, Adjustment::Rotate { turns: 1 }]);
        let out = apply_recipe(sample(), &recipe, None).unwrap();
        assert_eq!(out.dimensions(), (1, 2));
        // (0,0) red → inverted cyan, rotated to (0,0); (1,0) blue → yellow at (0,1).
        assert_eq!(out.pixel(0, 0), Some(Rgb::new(0, 255, 255)));
        assert_eq!(out.pixel(0, 1), Some(Rgb::new(255, 255, 0)));
    }

    #[test]
    fn test_vignette_without_overlays_fails_fast() {
        let recipe = Recipe::new(vec![Adjustment::Invert, Adjustment::VignetteGrain]);
        let err = apply_recipe(sample(), &recipe, None).unwrap_err();
        assert!(matches!(err, TransformError::MissingOverlays("vignette_grain")));
    }

    #[test]
    fn test_vignette_with_overlays() {
        let overlays = Overlays::new(Raster::new(2, 1), Raster::new(2, 1));
        let out = apply_adjustment(sample(), &Adjustment::VignetteGrain, Some(&overlays)).unwrap();
        // 255 × 0.65 × 0.95 × 1.2 = 188.955
        assert_eq!(out.pixel(0, 0), Some(Rgb::new(188, 0, 0)));
    }

    #[test]
    fn test_dimension_mismatch_propagates() {
        let overlays = Overlays::new(Raster::new(1, 1), Raster::new(2, 1));
        let err = apply_adjustment(sample(), &Adjustment::VignetteGrain, Some(&overlays)).unwrap_err();
        assert!(matches!(err, TransformError::DimensionMismatch { role: "halo", .. }));
    }
}
