//! Shared configuration for Crayon
//!
//! This crate is the single source of truth for the values the fill engine
//! compares colors with: the outline (boundary) color, the three named
//! tolerances, the comparison policy, and the near-boundary guard.
//!
//! Colors are `[r, g, b, a]` with channels in `0.0..=1.0`.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Fallback tolerance for all three comparisons
pub const DEFAULT_TOLERANCE: f32 = 0.55;

/// Fallback outline color (opaque black)
pub const DEFAULT_BOUNDARY_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Fallback fill color (opaque red)
pub const DEFAULT_FILL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Fallback gray level separating outline ink from paper
pub const DEFAULT_OUTLINE_THRESHOLD: f32 = 0.5;

/// Fallback edge length of a dirty-tracking tile, in pixels
pub const DEFAULT_TILE_SIZE: u32 = 128;

/// Environment variable toggling the near-boundary guard
pub const ENV_NEAR_BOUNDARY_GUARD: &str = "CRAYON_NEAR_BOUNDARY_GUARD";

/// Environment variable selecting the comparison policy
pub const ENV_COMPARISON_POLICY: &str = "CRAYON_COMPARISON_POLICY";

/// A tolerance must be finite and non-negative
pub fn check_tolerance(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTolerance { name, value })
    }
}

/// An outline threshold must lie within 0.0..=1.0 (NaN is rejected)
pub fn check_outline_threshold(value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold(value))
    }
}

/// Which color-similarity predicate to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonPolicy {
    /// Every RGB channel must differ by less than the tolerance
    #[default]
    Channel,
    /// Channel closeness plus brightness and saturation closeness.
    /// Rejects false matches around anti-aliased outline edges.
    Extended,
}

impl ComparisonPolicy {
    /// Parse a policy name (`channel` or `extended`, case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "channel" => Some(Self::Channel),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }
}

/// The three independent tolerances the engine compares with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Is this pixel part of the outline?
    pub boundary: f32,
    /// Does this pixel belong to the region being filled?
    pub region: f32,
    /// Is the start pixel already the fill color?
    pub filled: f32,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::uniform(DEFAULT_TOLERANCE)
    }
}

impl Tolerances {
    /// Use the same tolerance for all three comparisons
    pub fn uniform(tolerance: f32) -> Self {
        Self {
            boundary: tolerance,
            region: tolerance,
            filled: tolerance,
        }
    }

    /// Check every tolerance is finite and non-negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_tolerance("boundary", self.boundary)?;
        check_tolerance("region", self.region)?;
        check_tolerance("filled", self.filled)
    }
}

/// Fill engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    /// Reference color of the outline artwork
    pub boundary_color: [f32; 4],
    /// Per-comparison tolerances
    pub tolerances: Tolerances,
    /// Predicate used for all three comparisons
    pub policy: ComparisonPolicy,
    /// Leave pixels touching the outline unfilled (stops bleed through 1px gaps)
    pub near_boundary_guard: bool,
    /// Gray level used by outline segmentation
    pub outline_threshold: f32,
    /// Tile edge length for dirty tracking
    pub tile_size: u32,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            boundary_color: DEFAULT_BOUNDARY_COLOR,
            tolerances: Tolerances::default(),
            policy: ComparisonPolicy::Channel,
            near_boundary_guard: false,
            outline_threshold: DEFAULT_OUTLINE_THRESHOLD,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl FillConfig {
    /// Create a config with the given outline color and a uniform tolerance
    pub fn new(boundary_color: [f32; 4], tolerance: f32) -> Self {
        Self {
            boundary_color,
            tolerances: Tolerances::uniform(tolerance),
            ..Self::default()
        }
    }

    /// Set the comparison policy
    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable the near-boundary guard
    pub fn with_near_boundary_guard(mut self, enabled: bool) -> Self {
        self.near_boundary_guard = enabled;
        self
    }

    /// Set the three tolerances
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Parse and validate a JSON config. Missing fields use the fallback constants.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            "Loaded fill config: policy={:?}, guard={}, tolerances={:?}",
            config.policy, config.near_boundary_guard, config.tolerances
        );
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate tolerances, threshold and tile size
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tolerances.validate()?;
        check_outline_threshold(self.outline_threshold)?;
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize(self.tile_size));
        }
        Ok(())
    }

    /// Apply `CRAYON_NEAR_BOUNDARY_GUARD` and `CRAYON_COMPARISON_POLICY` if set.
    /// Unrecognized values are ignored with a warning.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, keyed by the `ENV_*` names
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_NEAR_BOUNDARY_GUARD) {
            match parse_flag(&value) {
                Some(enabled) => self.near_boundary_guard = enabled,
                None => warn!("Ignoring {}={:?}", ENV_NEAR_BOUNDARY_GUARD, value),
            }
        }
        if let Some(value) = lookup(ENV_COMPARISON_POLICY) {
            match ComparisonPolicy::parse(&value) {
                Some(policy) => self.policy = policy,
                None => warn!("Ignoring {}={:?}", ENV_COMPARISON_POLICY, value),
            }
        }
        self
    }

    /// True if switching to `other` changes which pixels are outline pixels
    pub fn boundary_differs(&self, other: &FillConfig) -> bool {
        self.boundary_color != other.boundary_color
            || self.tolerances.boundary != other.tolerances.boundary
            || self.policy != other.policy
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
