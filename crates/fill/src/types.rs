use crayon_config::{ComparisonPolicy, FillConfig, Tolerances};
use serde::{Deserialize, Serialize};

/// Integer pixel position, row 0 at the top of the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

impl PixelCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for PixelCoord {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// A single fill action: where, what color, and how to compare
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRequest {
    /// Start pixel (the tap)
    pub start: PixelCoord,
    /// Color written into the region
    pub fill_color: [f32; 4],
    /// Region-membership and already-filled tolerances are read from here.
    /// The boundary tolerance only matters when the mask is computed.
    pub tolerances: Tolerances,
    /// Predicate used for region and already-filled comparisons
    pub policy: ComparisonPolicy,
    /// Skip (and do not expand past) pixels with a 4-neighbor on the outline
    pub near_boundary_guard: bool,
}

impl FillRequest {
    /// Request using the fallback tolerances and policy
    pub fn new(start: PixelCoord, fill_color: [f32; 4]) -> Self {
        Self::from_config(start, fill_color, &FillConfig::default())
    }

    /// Request taking its comparison settings from a config
    pub fn from_config(start: PixelCoord, fill_color: [f32; 4], config: &FillConfig) -> Self {
        Self {
            start,
            fill_color,
            tolerances: config.tolerances,
            policy: config.policy,
            near_boundary_guard: config.near_boundary_guard,
        }
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn with_policy(mut self, policy: ComparisonPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_near_boundary_guard(mut self, enabled: bool) -> Self {
        self.near_boundary_guard = enabled;
        self
    }
}

/// Why a fill did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Start pixel is outside the image
    OutOfBounds,
    /// Start pixel is part of the outline
    BoundaryStart,
    /// Start pixel already matches the fill color
    AlreadyFilled,
}

/// Result of a fill that received valid input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillOutcome {
    /// Guard tripped, image untouched
    Rejected(RejectReason),
    /// Number of pixels repainted (may be 0)
    Applied(usize),
}

impl FillOutcome {
    /// Pixels repainted by this fill
    pub fn painted(&self) -> usize {
        match self {
            Self::Rejected(_) => 0,
            Self::Applied(count) => *count,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
