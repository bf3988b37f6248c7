//! Color-similarity predicate shared by boundary detection and region fill
//!
//! All comparisons are strict: a difference equal to the tolerance is not similar.
//! Alpha is never compared.

use crayon_config::ComparisonPolicy;

/// Mean of the RGB channels
#[inline]
pub fn brightness(c: [f32; 4]) -> f32 {
    (c[0] + c[1] + c[2]) / 3.0
}

/// Spread between the largest and smallest RGB channel
#[inline]
pub fn saturation(c: [f32; 4]) -> f32 {
    let max = c[0].max(c[1]).max(c[2]);
    let min = c[0].min(c[1]).min(c[2]);
    max - min
}

/// Every RGB channel differs by less than `tolerance`
#[inline]
pub fn channels_close(a: [f32; 4], b: [f32; 4], tolerance: f32) -> bool {
    (a[0] - b[0]).abs() < tolerance
        && (a[1] - b[1]).abs() < tolerance
        && (a[2] - b[2]).abs() < tolerance
}

/// Compare two colors under the given policy
#[inline]
pub fn is_similar(a: [f32; 4], b: [f32; 4], tolerance: f32, policy: ComparisonPolicy) -> bool {
    if !channels_close(a, b, tolerance) {
        return false;
    }
    match policy {
        ComparisonPolicy::Channel => true,
        ComparisonPolicy::Extended => {
            (brightness(a) - brightness(b)).abs() < tolerance
                && (saturation(a) - saturation(b)).abs() < tolerance
        }
    }
}
