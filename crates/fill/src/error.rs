//! Error types for the fill engine

use crayon_config::ConfigError;
use thiserror::Error;

/// Invalid input to a boundary or fill operation.
///
/// A fill that has nothing to do is not an error; see [`crate::FillOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum FillError {
    /// Image has no pixels (not loaded)
    #[error("Empty image: no pixels to process")]
    EmptyImage,

    /// Pixel buffer length does not match width * height
    #[error("Buffer size mismatch: expected {expected} pixels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Boundary mask was computed for a different image
    #[error(
        "Boundary mask is {mask_width}x{mask_height} but image is {image_width}x{image_height}"
    )]
    MaskMismatch {
        mask_width: u32,
        mask_height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// Configuration or a tolerance/threshold argument failed validation
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for fill operations
pub type FillResult<T> = Result<T, FillError>;

