//! Error types for configuration loading and validation.

/// Errors that can occur while loading or validating a [`crate::FillConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {name} tolerance: {value} (must be finite and >= 0)")]
    InvalidTolerance { name: &'static str, value: f32 },

    #[error("Invalid outline threshold: {0} (must be within 0..=1)")]
    InvalidThreshold(f32),

    #[error("Invalid tile size: {0}")]
    InvalidTileSize(u32),
}
