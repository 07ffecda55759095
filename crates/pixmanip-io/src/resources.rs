//! Overlay resources for the vignette/grain filter.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use pixmanip_core::{Overlays, Raster};
use serde::{Deserialize, Serialize};

use crate::codec::{load_image, raster_from_rgb_image, raster_to_rgb_image};
use crate::error::IoError;

/// Environment variable overriding the resource directory.
pub const RESOURCE_DIR_ENV: &str = "PIXMANIP_RESOURCE_DIR";
/// Resource directory used when the environment variable is unset.
const DEFAULT_RESOURCE_DIR: &str = "resources";
const DEFAULT_HALO: &str = "halo.png";
const DEFAULT_GRAIN: &str = "decorative_grain.png";

/// Where the overlay images live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directory containing the overlay files.
    pub dir: PathBuf,
    /// Vignette file name, relative to `dir`.
    #[serde(default = "ResourceConfig::default_halo")]
    pub halo: String,
    /// Grain texture file name, relative to `dir`.
    #[serde(default = "ResourceConfig::default_grain")]
    pub grain: String,
}

impl ResourceConfig {
    /// Resources rooted at `dir` with the default file names.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            halo: Self::default_halo(),
            grain: Self::default_grain(),
        }
    }

    pub fn halo_path(&self) -> PathBuf {
        self.dir.join(&self.halo)
    }

    pub fn grain_path(&self) -> PathBuf {
        self.dir.join(&self.grain)
    }

    fn default_halo() -> String {
        DEFAULT_HALO.to_string()
    }

    fn default_grain() -> String {
        DEFAULT_GRAIN.to_string()
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self::with_dir(
            std::env::var_os(RESOURCE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESOURCE_DIR)),
        )
    }
}

/// Load the halo and grain overlays sized to `width × height`.
///
/// Overlays whose dimensions differ from the target are resized with a
/// triangle filter so they can be blended pixel-for-pixel.
pub fn load_overlays(config: &ResourceConfig, width: u32, height: u32) -> Result<Overlays, IoError> {
    let halo = load_sized(&config.halo_path(), width, height)?;
    let grain = load_sized(&config.grain_path(), width, height)?;
    Ok(Overlays::new(halo, grain))
}

fn load_sized(path: &Path, width: u32, height: u32) -> Result<Raster, IoError> {
    let raster = load_image(path)?;
    fit_to(raster, width, height, path)
}

/// Resize `raster` to `width × height` unless it already matches.
pub(crate) fn fit_to(raster: Raster, width: u32, height: u32, path: &Path) -> Result<Raster, IoError> {
    if raster.dimensions() == (width, height) {
        return Ok(raster);
    }
    tracing::warn!(
        "overlay {} is {}x{}, resizing to {width}x{height}",
        path.display(),
        raster.width(),
        raster.height()
    );
    if raster.is_empty() || width == 0 || height == 0 {
        return Ok(Raster::new(width, height));
    }
    let resized = imageops::resize(&raster_to_rgb_image(&raster), width, height, FilterType::Triangle);
    raster_from_rgb_image(&resized)
}
