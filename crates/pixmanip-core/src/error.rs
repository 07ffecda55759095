//! Errors raised by core transforms.

/// Precondition failures surfaced to the caller.
///
/// Out-of-range numeric parameters are not errors; they are clamped by the
/// operation that receives them.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("{role} image is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        role: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
    #[error("pixel buffer holds {actual} pixels, {width}x{height} needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("adjustment `{0}` needs overlay images but none were supplied")]
    MissingOverlays(&'static str),
    #[error("invalid recipe: {0}")]
    Recipe(#[from] serde_json::Error),
}
