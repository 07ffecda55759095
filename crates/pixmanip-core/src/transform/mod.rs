//! Transform recipes — adjustment definitions and their evaluation.

pub mod evaluate;
pub mod params;
