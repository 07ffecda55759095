//! File-to-file processing: load, apply a recipe, save.

use std::path::Path;

use pixmanip_core::{Recipe, apply_recipe};

use crate::codec::{load_image, save_image};
use crate::error::IoError;
use crate::resources::{ResourceConfig, load_overlays};

/// Load `input`, apply `recipe`, and write the result to `output`.
///
/// Overlays are read from `resources` only when the recipe contains a step
/// that blends them, sized to the input image.
pub fn process_file(
    input: &Path,
    output: &Path,
    recipe: &Recipe,
    resources: &ResourceConfig,
) -> Result<(), IoError> {
    let image = load_image(input)?;
    let overlays = if recipe.needs_overlays() {
        let (width, height) = image.dimensions();
        Some(load_overlays(resources, width, height)?)
    } else {
        None
    };

    let out = apply_recipe(image, recipe, overlays.as_ref())?;
    save_image(&out, output)
}
