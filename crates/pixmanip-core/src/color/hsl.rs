//! RGB ↔ HSL conversion.
//!
//! The math is delegated to `palette`'s sRGB/HSL conversion; this module
//! fixes the conventions used by the grading tools:
//! - hue in degrees, normalized to `[0, 360)`
//! - saturation and lightness in `[0, 1]`
//! - hue is 0 for achromatic pixels (`r == g == b`)
//!
//! Converting `Rgb → Hsl → Rgb` without touching any field reproduces the
//! original channels within ±1 (rounding on the way back to 8 bits).

use palette::{FromColor, Srgb};

use crate::color::Rgb;

type PaletteHsl = palette::Hsl<palette::encoding::Srgb, f64>;

/// A transient HSL view of one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation, `[0, 1]`.
    pub saturation: f64,
    /// Lightness, `[0, 1]`.
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Derive the HSL representation of an 8-bit pixel.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let srgb = Srgb::<u8>::new(rgb.r, rgb.g, rgb.b).into_format::<f64>();
        let hsl = PaletteHsl::from_color(srgb);

        let hue = if rgb.is_achromatic() {
            0.0
        } else {
            normalize_hue(hsl.hue.into_positive_degrees())
        };

        Self {
            hue,
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// Convert back to an 8-bit pixel, rounding each channel.
    ///
    /// Saturation and lightness are clamped to `[0, 1]`; any hue is accepted
    /// and wrapped, so 360° is the same as 0°.
    pub fn to_rgb(self) -> Rgb {
        let hsl = PaletteHsl::new(
            normalize_hue(self.hue),
            self.saturation.clamp(0.0, 1.0),
            self.lightness.clamp(0.0, 1.0),
        );
        let srgb = Srgb::<f64>::from_color(hsl).into_format::<u8>();
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

fn normalize_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
