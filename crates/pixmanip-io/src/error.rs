use std::path::PathBuf;

use pixmanip_core::TransformError;

/// Errors that can occur while loading, saving, or processing image files.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("no image format for extension `{0}`")]
    UnsupportedExtension(String),
    #[error("output path has no extension: {0}")]
    MissingExtension(PathBuf),
    #[error(transparent)]
    Transform(#[from] TransformError),
}
