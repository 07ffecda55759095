//! Hue, saturation, and lightness overrides.
//!
//! Each operation converts every pixel to HSL, overwrites exactly one
//! component with a fixed value, and converts back. Out-of-range requests
//! are clamped, never rejected:
//! - hue → `[0, 360]`
//! - saturation, lightness → `[0, 1]`

use crate::color::{Hsl, Rgb};
use crate::image::Raster;

pub const HUE_MAX: f64 = 360.0;

/// Which HSL component an override replaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HslComponent {
    Hue(f64),
    Saturation(f64),
    Lightness(f64),
}

impl HslComponent {
    /// Clamp the carried value to its legal range.
    pub fn clamped(self) -> Self {
        match self {
            Self::Hue(h) => Self::Hue(clamp_or_min(h, 0.0, HUE_MAX)),
            Self::Saturation(s) => Self::Saturation(clamp_or_min(s, 0.0, 1.0)),
            Self::Lightness(l) => Self::Lightness(clamp_or_min(l, 0.0, 1.0)),
        }
    }

    fn overwrite(self, hsl: &mut Hsl) {
        match self {
            Self::Hue(h) => hsl.hue = h,
            Self::Saturation(s) => hsl.saturation = s,
            Self::Lightness(l) => hsl.lightness = l,
        }
    }
}

/// Replace one HSL component of a single pixel. `component` must already be clamped.
pub fn override_pixel(px: Rgb, component: HslComponent) -> Rgb {
    let mut hsl = Hsl::from_rgb(px);
    component.overwrite(&mut hsl);
    hsl.to_rgb()
}

/// Replace one HSL component on every pixel, clamping the value first.
pub fn override_component(mut image: Raster, component: HslComponent) -> Raster {
    let component = component.clamped();
    tracing::debug!(
        "hsl override {:?} on {}x{}",
        component,
        image.width(),
        image.height()
    );
    image.map_pixels(|px| override_pixel(px, component));
    image
}

/// Set every pixel's hue, in degrees.
pub fn set_hue(image: Raster, hue: f64) -> Raster {
    override_component(image, HslComponent::Hue(hue))
}

/// Set every pixel's saturation.
pub fn set_saturation(image: Raster, saturation: f64) -> Raster {
    override_component(image, HslComponent::Saturation(saturation))
}

/// Set every pixel's lightness.
pub fn set_lightness(image: Raster, lightness: f64) -> Raster {
    override_component(image, HslComponent::Lightness(lightness))
}

// f64::clamp passes NaN through; treat NaN as the lower bound.
fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}
