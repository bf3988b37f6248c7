//! Surface operations for the coloring canvas

use crate::surface::Image;
use crate::tiles::TileCoord;

use super::ColoringCanvas;

impl ColoringCanvas {
    /// Get the surface width
    pub fn width(&self) -> u32 {
        self.surface.surface().width()
    }

    /// Get the surface height
    pub fn height(&self) -> u32 {
        self.surface.surface().height()
    }

    /// Read access to the current pixels
    pub fn image(&self) -> &Image {
        self.surface.surface()
    }

    /// Give the painted image back to the caller
    pub fn into_image(self) -> Image {
        self.surface.into_surface()
    }

    /// Get a single pixel's color
    ///
    /// Returns None if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.surface.surface().get_pixel(x, y)
    }

    /// Take dirty tiles for GPU upload
    ///
    /// Returns the list of tile coordinates that have been modified
    /// since the last call. The dirty flags are cleared.
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        self.surface.take_dirty_tiles()
    }

    /// Check if there are any dirty tiles
    pub fn has_dirty_tiles(&self) -> bool {
        self.surface.has_dirty_tiles()
    }

    /// Get tile data for upload
    pub fn get_tile_data(&self, coord: TileCoord) -> Vec<[f32; 4]> {
        self.surface.get_tile_data(coord)
    }

    /// Get tile bounds (x, y, width, height) in pixel coordinates
    pub fn get_tile_bounds(&self, coord: TileCoord) -> (u32, u32, u32, u32) {
        self.surface.get_tile_bounds(coord)
    }

    /// Get the tile size
    pub fn tile_size(&self) -> u32 {
        self.surface.tile_size()
    }

    /// Bounding box of the given tiles in pixel coordinates
    pub fn compute_tiles_bounding_box(&self, tiles: &[TileCoord]) -> Option<(u32, u32, u32, u32)> {
        self.surface.compute_tiles_bounding_box(tiles)
    }

    /// Get raw surface data as bytes (for full texture upload)
    pub fn surface_as_bytes(&self) -> &[u8] {
        self.surface.surface().as_bytes()
    }
}
