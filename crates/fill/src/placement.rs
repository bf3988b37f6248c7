//! Mapping from world space to image pixels.
//!
//! The image is drawn as a quad centered at `center`, scaled by `scale`, with
//! `pixels_per_unit` image pixels per world unit at scale 1. World y points up;
//! image row 0 is the top row.

use glam::Vec2;

use crate::types::PixelCoord;

/// Where an image sits in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    /// World position of the image center
    pub center: Vec2,
    /// Zoom applied to the image quad
    pub scale: Vec2,
    /// Image pixels per world unit at scale 1
    pub pixels_per_unit: f32,
}

impl Default for ImagePlacement {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            scale: Vec2::ONE,
            pixels_per_unit: 100.0,
        }
    }
}

impl ImagePlacement {
    pub fn new(center: Vec2, scale: Vec2, pixels_per_unit: f32) -> Self {
        Self {
            center,
            scale,
            pixels_per_unit,
        }
    }

    /// Convert a world point to the pixel under it.
    ///
    /// Fractional positions are floored, never rounded. Returns None for points
    /// outside the image or for a degenerate placement (zero scale or density).
    pub fn world_to_pixel(&self, world: Vec2, width: u32, height: u32) -> Option<PixelCoord> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 || self.pixels_per_unit <= 0.0 {
            return None;
        }

        let local = (world - self.center) / self.scale;
        let half = Vec2::new(width as f32, height as f32) / 2.0;
        let texel = (local * self.pixels_per_unit + half).floor();

        if !texel.is_finite()
            || texel.x < 0.0
            || texel.y < 0.0
            || texel.x >= width as f32
            || texel.y >= height as f32
        {
            return None;
        }

        // texel.y counts rows from the bottom edge
        let column = texel.x as u32;
        let row_from_bottom = texel.y as u32;
        Some(PixelCoord::new(column, height - 1 - row_from_bottom))
    }

    /// World position of a pixel's center (inverse of [`Self::world_to_pixel`])
    pub fn pixel_center(&self, coord: PixelCoord, width: u32, height: u32) -> Vec2 {
        let row_from_bottom = (height - 1 - coord.y) as f32;
        let texel = Vec2::new(coord.x as f32 + 0.5, row_from_bottom + 0.5);
        let half = Vec2::new(width as f32, height as f32) / 2.0;
        (texel - half) / self.pixels_per_unit * self.scale + self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement() -> ImagePlacement {
        ImagePlacement::new(Vec2::ZERO, Vec2::ONE, 1.0)
    }

    #[test]
    fn test_center_maps_to_middle_pixel() {
        // 4x4 image spans -2..2 in world units
        let coord = placement().world_to_pixel(Vec2::ZERO, 4, 4);
        assert_eq!(coord, Some(PixelCoord::new(2, 1)));
    }

    #[test]
    fn test_corners() {
        let p = placement();
        // Top-left world corner is row 0
        assert_eq!(p.world_to_pixel(Vec2::new(-1.99, 1.99), 4, 4), Some(PixelCoord::new(0, 0)));
        // Bottom-right world corner is the last row
        assert_eq!(p.world_to_pixel(Vec2::new(1.99, -1.99), 4, 4), Some(PixelCoord::new(3, 3)));
    }

    #[test]
    fn test_floor_not_round() {
        let p = placement();
        // Local x = -0.1 floors to column 1, rounding would give 2
        assert_eq!(p.world_to_pixel(Vec2::new(-0.1, 0.4), 4, 4), Some(PixelCoord::new(1, 1)));
        // Local x = 0.9 floors to column 2, rounding would give 3
        assert_eq!(p.world_to_pixel(Vec2::new(0.9, 0.4), 4, 4), Some(PixelCoord::new(2, 1)));
    }

    #[test]
    fn test_outside_image() {
        let p = placement();
        assert_eq!(p.world_to_pixel(Vec2::new(-2.01, 0.0), 4, 4), None);
        assert_eq!(p.world_to_pixel(Vec2::new(2.0, 0.0), 4, 4), None);
        assert_eq!(p.world_to_pixel(Vec2::new(0.0, 2.0), 4, 4), None);
    }

    #[test]
    fn test_scaled_and_offset() {
        let p = ImagePlacement::new(Vec2::new(10.0, 5.0), Vec2::splat(2.0), 2.0);
        // Zoomed 2x: one world unit covers one pixel
        assert_eq!(p.world_to_pixel(Vec2::new(10.5, 5.5), 4, 4), Some(PixelCoord::new(2, 1)));
        assert_eq!(p.world_to_pixel(Vec2::new(8.5, 3.5), 4, 4), Some(PixelCoord::new(0, 3)));
    }

    #[test]
    fn test_degenerate_placement() {
        let p = ImagePlacement::new(Vec2::ZERO, Vec2::new(0.0, 1.0), 1.0);
        assert_eq!(p.world_to_pixel(Vec2::ZERO, 4, 4), None);
        let p = ImagePlacement::new(Vec2::ZERO, Vec2::ONE, 0.0);
        assert_eq!(p.world_to_pixel(Vec2::ZERO, 4, 4), None);
    }

    #[test]
    fn test_pixel_center_roundtrip() {
        let p = ImagePlacement::new(Vec2::new(-3.0, 1.0), Vec2::new(1.5, 0.5), 32.0);
        for (x, y) in [(0, 0), (17, 5), (63, 31)] {
            let coord = PixelCoord::new(x, y);
            let world = p.pixel_center(coord, 64, 32);
            assert_eq!(p.world_to_pixel(world, 64, 32), Some(coord));
        }
    }
}
