//! Color model — 8-bit RGB pixels, luminance, and the HSL transform.

pub mod hsl;
pub mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
