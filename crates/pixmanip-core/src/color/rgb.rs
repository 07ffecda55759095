//! 8-bit RGB pixel and its luminance.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Weights applied to the squared channels in [`Rgb::luminance`].
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// One pixel with three 8-bit channels.
///
/// `#[repr(C)]` so a `&[Rgb]` can be viewed as packed `RGBRGB…` bytes.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable,
)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a pixel from floating-point channel values.
    ///
    /// Each value is truncated toward zero and then clamped to `[0, 255]`.
    /// NaN maps to 0.
    pub fn from_channels_f64(channels: [f64; 3]) -> Self {
        Self::new(
            truncate_channel(channels[0]),
            truncate_channel(channels[1]),
            truncate_channel(channels[2]),
        )
    }

    /// Channels as `[r, g, b]` in `f64`.
    pub fn to_channels_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }

    /// Perceived brightness, `sqrt(0.299·r² + 0.587·g² + 0.114·b²)`.
    ///
    /// Ranges over `[0, 255]`: black is 0, white is 255.
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.to_channels_f64();
        (LUMA_WEIGHTS[0] * r * r + LUMA_WEIGHTS[1] * g * g + LUMA_WEIGHTS[2] * b * b).sqrt()
    }

    /// True when all three channels are equal.
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(px: Rgb) -> Self {
        [px.r, px.g, px.b]
    }
}

fn truncate_channel(value: f64) -> u8 {
    // `as` saturates at the u8 bounds and maps NaN to 0.
    value.trunc() as u8
}
