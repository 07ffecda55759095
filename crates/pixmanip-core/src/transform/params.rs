//! Serializable adjustment chain.
//!
//! A [`Recipe`] is an ordered list of [`Adjustment`]s. It is the only
//! configuration surface of the core: callers build one in code or parse it
//! from JSON, then hand it to [`apply_recipe`](crate::transform::evaluate::apply_recipe).
//!
//! ```json
//! { "steps": [ { "op": "sepia" }, { "op": "hue", "degrees": 200 }, { "op": "rotate", "turns": 1 } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TransformError;

/// One image operation and its parameters.
///
/// Numeric parameters are stored as given; the operations clamp them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Adjustment {
    /// Channel average, `R = G = B = (R + G + B) / 3`.
    Grayscale,
    /// `255 − channel`.
    Invert,
    /// Fixed sepia matrix.
    Sepia,
    /// `R × 1.2`, `B / 1.5`.
    Warm,
    /// Set every pixel's hue, in degrees `[0, 360]`.
    Hue { degrees: f64 },
    /// Set every pixel's saturation `[0, 1]`.
    Saturation { value: f64 },
    /// Set every pixel's lightness `[0, 1]`.
    Lightness { value: f64 },
    /// Black/white around the median luminance.
    MedianThreshold,
    /// Quarter turns clockwise.
    Rotate {
        #[serde(default = "Adjustment::default_turns")]
        turns: u32,
    },
    /// Halo vignette + grain blend with warm shift. Needs [`Overlays`](crate::composite::Overlays).
    VignetteGrain,
}

impl Adjustment {
    /// Short name for logs and error messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::Sepia => "sepia",
            Self::Warm => "warm",
            Self::Hue { .. } => "hue",
            Self::Saturation { .. } => "saturation",
            Self::Lightness { .. } => "lightness",
            Self::MedianThreshold => "median_threshold",
            Self::Rotate { .. } => "rotate",
            Self::VignetteGrain => "vignette_grain",
        }
    }

    /// Whether this step consumes overlay images.
    pub const fn needs_overlays(&self) -> bool {
        matches!(self, Self::VignetteGrain)
    }

    /// Default for serde deserialization when `turns` is absent.
    fn default_turns() -> u32 {
        1
    }
}

/// An ordered adjustment chain. The default recipe is empty (identity).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub steps: Vec<Adjustment>,
}

impl Recipe {
    pub fn new(steps: Vec<Adjustment>) -> Self {
        Self { steps }
    }

    /// Parse a recipe from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, TransformError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, TransformError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether any step consumes overlay images.
    pub fn needs_overlays(&self) -> bool {
        self.steps.iter().any(Adjustment::needs_overlays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_steps() {
        let recipe = Recipe::from_json(
            r#"{ "steps": [
                { "op": "grayscale" },
                { "op": "hue", "degrees": 500 },
                { "op": "rotate" },
                { "op": "rotate", "turns": 3 },
                { "op": "vignette_grain" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            recipe.steps,
            vec![
                Adjustment::Grayscale,
                Adjustment::Hue { degrees: 500.0 },
                Adjustment::Rotate { turns: 1 },
                Adjustment::Rotate { turns: 3 },
                Adjustment::VignetteGrain,
            ]
        );
        assert!(recipe.needs_overlays());
    }

    #[test]
    fn test_unknown_op_is_an_error() {
        let err = Recipe::from_json(r#"{ "steps": [ { "op": "blur" } ] }"#).unwrap_err();
        assert!(matches!(err, TransformError::Recipe(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let recipe = Recipe::new(vec![
            Adjustment::Saturation { value: 0.25 },
            Adjustment::MedianThreshold,
        ]);
        let json = recipe.to_json().unwrap();
        assert!(json.contains("\"op\": \"saturation\""));
        assert_eq!(Recipe::from_json(&json).unwrap(), recipe);
        assert!(!recipe.needs_overlays());
    }

    #[test]
    fn test_default_recipe_is_empty() {
        assert!(Recipe::default().steps.is_empty());
    }
}
