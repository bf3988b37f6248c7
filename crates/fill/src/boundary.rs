//! Boundary classification
//!
//! Outline pixels are found once per loaded image and kept in a [`BoundaryMask`].
//! The mask never changes afterwards, so fills that repaint pixels to a color
//! resembling the outline do not turn them into new walls.

use crayon_config::{ComparisonPolicy, check_outline_threshold, check_tolerance};
use tracing::debug;

use crate::color::{brightness, is_similar};
use crate::error::{FillError, FillResult};
use crate::surface::Image;
use crate::types::PixelCoord;

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Immutable set of outline pixels for one image, stored as a bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
    count: usize,
}

impl BoundaryMask {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of boundary pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Is this coordinate an outline pixel? Out-of-bounds coordinates are not.
    #[inline]
    pub fn contains(&self, coord: PixelCoord) -> bool {
        if coord.x >= self.width || coord.y >= self.height {
            return false;
        }
        self.bits[(coord.y as usize) * (self.width as usize) + (coord.x as usize)]
    }

    /// Bitmap lookup by buffer index
    #[inline]
    pub(crate) fn contains_index(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Does any 4-neighbor of this coordinate lie on the outline?
    pub fn is_near_boundary(&self, coord: PixelCoord) -> bool {
        let PixelCoord { x, y } = coord;
        (x > 0 && self.contains(PixelCoord::new(x - 1, y)))
            || self.contains(PixelCoord::new(x.saturating_add(1), y))
            || (y > 0 && self.contains(PixelCoord::new(x, y - 1)))
            || self.contains(PixelCoord::new(x, y.saturating_add(1)))
    }

    /// Iterate over boundary coordinates in row-major order
    pub fn iter(&self) -> impl Iterator<Item = PixelCoord> + '_ {
        let width = self.width as usize;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, is_boundary)| **is_boundary)
            .map(move |(index, _)| PixelCoord::new((index % width) as u32, (index / width) as u32))
    }

    /// Check that this mask was computed for an image of the same size
    pub fn check_matches(&self, image: &Image) -> FillResult<()> {
        if self.width != image.width() || self.height != image.height() {
            return Err(FillError::MaskMismatch {
                mask_width: self.width,
                mask_height: self.height,
                image_width: image.width(),
                image_height: image.height(),
            });
        }
        Ok(())
    }
}

/// Classify every pixel of `image` as outline or fillable.
///
/// A pixel is an outline pixel when its color is similar to `boundary_color`
/// under `tolerance` and `policy`. Runs in O(width * height); call it once per
/// loaded image, never per fill.
///
/// # Errors
///
/// Returns [`FillError::EmptyImage`] if the image has no pixels, or
/// [`FillError::Config`] if the tolerance is negative or not finite.
pub fn compute_boundary_mask(
    image: &Image,
    boundary_color: [f32; 4],
    tolerance: f32,
    policy: ComparisonPolicy,
) -> FillResult<BoundaryMask> {
    if image.is_empty() {
        return Err(FillError::EmptyImage);
    }
    check_tolerance("boundary", tolerance)?;

    let bits: Vec<bool> = image
        .pixels()
        .iter()
        .map(|&pixel| is_similar(pixel, boundary_color, tolerance, policy))
        .collect();
    let count = bits.iter().filter(|&&b| b).count();

    debug!(
        "Boundary mask computed: {}x{}, {} outline pixels",
        image.width(), image.height(), count
    );

    Ok(BoundaryMask {
        width: image.width(),
        height: image.height(),
        bits,
        count,
    })
}

/// Reduce an image to clean black outlines on white paper.
///
/// Pixels whose RGB mean is above `threshold` become opaque white, all others
/// opaque black. Useful for scanned or anti-aliased artwork before
/// [`compute_boundary_mask`].
///
/// # Errors
///
/// Fails on an empty image or a threshold outside `0.0..=1.0` (including NaN).
pub fn segment_outlines(image: &Image, threshold: f32) -> FillResult<Image> {
    if image.is_empty() {
        return Err(FillError::EmptyImage);
    }
    check_outline_threshold(threshold)?;

    let pixels = image
        .pixels()
        .iter()
        .map(|&pixel| if brightness(pixel) > threshold { WHITE } else { BLACK })
        .collect();

    Image::from_pixels(image.width(), image.height(), pixels)
}
