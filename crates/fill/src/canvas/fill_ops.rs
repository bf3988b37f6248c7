//! Fill operations for the coloring canvas

use glam::Vec2;
use tracing::debug;

use crate::error::FillResult;
use crate::placement::ImagePlacement;
use crate::region::{RegionTrace, commit_region, find_region};
use crate::types::{FillOutcome, FillRequest, PixelCoord, RejectReason};

use super::ColoringCanvas;

impl ColoringCanvas {
    /// Build a request for `start` from the current config and fill color
    pub fn request_at(&self, start: PixelCoord) -> FillRequest {
        FillRequest::from_config(start, self.fill_color, &self.config)
    }

    /// Fill the region under `start` with the current fill color
    pub fn fill_at(&mut self, start: PixelCoord) -> FillResult<FillOutcome> {
        let request = self.request_at(start);
        self.fill(&request)
    }

    /// Fill the region under a world-space point (a tap).
    /// A point that misses the image is `Rejected(OutOfBounds)`.
    pub fn fill_at_world(
        &mut self,
        world: Vec2,
        placement: &ImagePlacement,
    ) -> FillResult<FillOutcome> {
        match placement.world_to_pixel(world, self.width(), self.height()) {
            Some(start) => self.fill_at(start),
            None => {
                debug!("Tap at {:?} is outside the image", world);
                Ok(FillOutcome::Rejected(RejectReason::OutOfBounds))
            }
        }
    }

    /// Run an explicit request against this canvas, marking repainted tiles dirty
    pub fn fill(&mut self, request: &FillRequest) -> FillResult<FillOutcome> {
        match find_region(self.surface.surface(), &self.mask, request)? {
            RegionTrace::Rejected(reason) => {
                debug!("Fill at {:?} rejected: {:?}", request.start, reason);
                Ok(FillOutcome::Rejected(reason))
            }
            RegionTrace::Region(indices) => {
                commit_region(self.surface.surface_mut(), &indices, request.fill_color);
                self.surface.mark_indices_dirty(&indices);
                debug!("Fill at {:?} repainted {} pixels", request.start, indices.len());
                Ok(FillOutcome::Applied(indices.len()))
            }
        }
    }

    /// Pixels a fill at `start` would repaint, without changing anything
    pub fn preview_at(&self, start: PixelCoord) -> FillResult<Vec<PixelCoord>> {
        let image = self.surface.surface();
        let trace = find_region(image, &self.mask, &self.request_at(start))?;
        Ok(match trace {
            RegionTrace::Rejected(_) => Vec::new(),
            RegionTrace::Region(indices) => indices.iter().map(|&i| image.coord_of(i)).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Image;
    use crate::tiles::TileCoord;
    use crayon_config::FillConfig;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    /// 8x8 page split by a vertical line at x=4, tiles of 4
    fn canvas() -> ColoringCanvas {
        let mut image = Image::filled(8, 8, WHITE);
        for y in 0..8 {
            image.set_pixel(4, y, BLACK);
        }
        let mut config = FillConfig::new(BLACK, 0.1);
        config.tile_size = 4;
        let mut canvas = ColoringCanvas::new(image, config).unwrap();
        canvas.set_fill_color(RED);
        canvas.take_dirty_tiles();
        canvas
    }

    #[test]
    fn test_fill_marks_only_touched_tiles() {
        let mut canvas = canvas();
        let outcome = canvas.fill_at(PixelCoord::new(0, 0)).unwrap();
        assert_eq!(outcome, FillOutcome::Applied(32));

        let mut tiles = canvas.take_dirty_tiles();
        tiles.sort_by_key(|t| (t.y, t.x));
        assert_eq!(
            tiles,
            vec![TileCoord { x: 0, y: 0 }, TileCoord { x: 0, y: 1 }]
        );
    }

    #[test]
    fn test_rejected_fill_marks_nothing() {
        let mut canvas = canvas();
        let before = canvas.image().clone();
        let outcome = canvas.fill_at(PixelCoord::new(4, 2)).unwrap();
        assert_eq!(outcome, FillOutcome::Rejected(RejectReason::BoundaryStart));
        assert!(!canvas.has_dirty_tiles());
        assert_eq!(canvas.image(), &before);
    }

    #[test]
    fn test_fill_at_world() {
        let mut canvas = canvas();
        let placement = ImagePlacement::new(Vec2::ZERO, Vec2::ONE, 1.0);

        // World (3.5, -3.5) is the bottom-right pixel (7, 7)
        let outcome = canvas.fill_at_world(Vec2::new(3.5, -3.5), &placement).unwrap();
        assert_eq!(outcome, FillOutcome::Applied(24));
        assert_eq!(canvas.get_pixel(7, 7), Some(RED));
        assert_eq!(canvas.get_pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn test_fill_at_world_miss() {
        let mut canvas = canvas();
        let placement = ImagePlacement::new(Vec2::ZERO, Vec2::ONE, 1.0);
        let outcome = canvas.fill_at_world(Vec2::new(10.0, 0.0), &placement).unwrap();
        assert_eq!(outcome, FillOutcome::Rejected(RejectReason::OutOfBounds));
    }

    #[test]
    fn test_preview_matches_fill() {
        let mut canvas = canvas();
        let preview = canvas.preview_at(PixelCoord::new(6, 1)).unwrap();
        assert_eq!(preview.len(), 24);
        assert!(!canvas.has_dirty_tiles());

        canvas.fill_at(PixelCoord::new(6, 1)).unwrap();
        assert!(preview
            .iter()
            .all(|c| canvas.get_pixel(c.x, c.y) == Some(RED)));
        assert!(canvas.preview_at(PixelCoord::new(6, 1)).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_request_overrides_guard() {
        let mut canvas = canvas();
        let request = canvas
            .request_at(PixelCoord::new(0, 0))
            .with_near_boundary_guard(true);
        // Column 3 touches the line and stays white
        assert_eq!(canvas.fill(&request).unwrap(), FillOutcome::Applied(24));
        assert_eq!(canvas.get_pixel(3, 0), Some(WHITE));
    }
}
