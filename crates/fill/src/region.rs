//! Region fill
//!
//! Breadth-first traversal over 4-connected pixels similar to the color under
//! the tap, bounded by a precomputed [`BoundaryMask`]. The image is only read
//! during traversal; repainting happens in a single commit afterwards, so a
//! rejected fill never leaves the buffer half-written.

use std::collections::VecDeque;

use crayon_config::check_tolerance;
use tracing::debug;

use crate::boundary::BoundaryMask;
use crate::color::is_similar;
use crate::error::{FillError, FillResult};
use crate::surface::Image;
use crate::types::{FillOutcome, FillRequest, PixelCoord, RejectReason};

/// 4-connectivity, in the order neighbors are enqueued
const NEIGHBOR_OFFSETS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// What a fill would do, computed without touching the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionTrace {
    /// A guard tripped
    Rejected(RejectReason),
    /// Buffer indices to repaint, in visit order
    Region(Vec<usize>),
}

impl RegionTrace {
    /// Number of pixels the fill would repaint
    pub fn len(&self) -> usize {
        match self {
            Self::Rejected(_) => 0,
            Self::Region(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find the pixels a fill would repaint, without mutating the image.
///
/// Guards, in order:
/// 1. `start` outside the image: `Rejected(OutOfBounds)`
/// 2. `start` on the outline: `Rejected(BoundaryStart)`
/// 3. `start` already similar to the fill color (filled tolerance):
///    `Rejected(AlreadyFilled)`
///
/// The color at `start` is captured once as the region reference. A visited
/// pixel is repainted only if it is not an outline pixel, is similar to the
/// reference (region tolerance) and, with the near-boundary guard on, has no
/// outline pixel among its 4 neighbors. Pixels failing any check are dead
/// ends: their neighbors are not enqueued through them.
///
/// # Errors
///
/// Returns an error if the image is empty, the mask was computed for an image
/// of another size, or a tolerance is negative or not finite.
pub fn find_region(
    image: &Image,
    mask: &BoundaryMask,
    request: &FillRequest,
) -> FillResult<RegionTrace> {
    if image.is_empty() {
        return Err(FillError::EmptyImage);
    }
    mask.check_matches(image)?;
    check_tolerance("region", request.tolerances.region)?;
    check_tolerance("filled", request.tolerances.filled)?;

    let Some(start_index) = image.index_of(request.start) else {
        return Ok(RegionTrace::Rejected(RejectReason::OutOfBounds));
    };
    if mask.contains_index(start_index) {
        return Ok(RegionTrace::Rejected(RejectReason::BoundaryStart));
    }

    let pixels = image.pixels();
    let reference = pixels[start_index];
    if is_similar(
        reference,
        request.fill_color,
        request.tolerances.filled,
        request.policy,
    ) {
        return Ok(RegionTrace::Rejected(RejectReason::AlreadyFilled));
    }

    let width = image.width() as i64;
    let height = image.height() as i64;
    let mut visited = vec![false; pixels.len()];
    let mut queue = VecDeque::new();
    let mut region = Vec::new();

    queue.push_back(request.start);
    visited[start_index] = true;

    while let Some(coord) = queue.pop_front() {
        let Some(index) = image.index_of(coord) else {
            continue;
        };
        if mask.contains_index(index) {
            continue;
        }
        if !is_similar(
            pixels[index],
            reference,
            request.tolerances.region,
            request.policy,
        ) {
            continue;
        }
        if request.near_boundary_guard && mask.is_near_boundary(coord) {
            continue;
        }

        region.push(index);

        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = coord.x as i64 + dx;
            let ny = coord.y as i64 + dy;
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }
            let neighbor_index = (ny * width + nx) as usize;
            if !visited[neighbor_index] {
                visited[neighbor_index] = true;
                queue.push_back(PixelCoord::new(nx as u32, ny as u32));
            }
        }
    }

    Ok(RegionTrace::Region(region))
}

/// Write `color` into every listed buffer index
pub(crate) fn commit_region(image: &mut Image, indices: &[usize], color: [f32; 4]) {
    let pixels = image.pixels_mut();
    for &index in indices {
        pixels[index] = color;
    }
}

/// Repaint the region around `request.start` with `request.fill_color`.
///
/// See [`find_region`] for the traversal rules. On `Applied` the whole region
/// is written in one batch; on `Rejected` or `Err` the image is untouched.
pub fn fill(
    image: &mut Image,
    mask: &BoundaryMask,
    request: &FillRequest,
) -> FillResult<FillOutcome> {
    match find_region(image, mask, request)? {
        RegionTrace::Rejected(reason) => {
            debug!("Fill at {:?} rejected: {:?}", request.start, reason);
            Ok(FillOutcome::Rejected(reason))
        }
        RegionTrace::Region(indices) => {
            commit_region(image, &indices, request.fill_color);
            debug!("Fill at {:?} repainted {} pixels", request.start, indices.len());
            Ok(FillOutcome::Applied(indices.len()))
        }
    }
}
