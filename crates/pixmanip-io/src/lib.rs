//! Pixmanip I/O — decoding, encoding, and overlay resources.
//!
//! Bridges files on disk and the core's [`Raster`](pixmanip_core::Raster)
//! using the `image` crate. The core never touches the filesystem; this
//! crate loads inputs and overlays, runs a recipe, and writes the result.

pub mod codec;
pub mod error;
pub mod pipeline;
pub mod resources;

pub use codec::{load_image, save_image};
pub use error::IoError;
pub use pipeline::process_file;
pub use resources::{ResourceConfig, load_overlays};
