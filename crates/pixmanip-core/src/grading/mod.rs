//! Grading tools — tone transforms, HSL overrides, and the median threshold.

pub mod hsl;
pub mod threshold;
pub mod tone;
