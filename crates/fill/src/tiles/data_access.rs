//! Tile data access and region queries

use super::{TileCoord, TiledSurface};

impl TiledSurface {
    /// Get pixel data for a tile in row-major order
    /// Edge tiles return fewer than tile_size * tile_size pixels
    pub fn get_tile_data(&self, coord: TileCoord) -> Vec<[f32; 4]> {
        let (x, y, width, height) = self.get_tile_bounds(coord);
        (y..y.saturating_add(height))
            .flat_map(|row| (x..x.saturating_add(width)).map(move |col| (col, row)))
            .filter_map(|(col, row)| self.surface.get_pixel(col, row))
            .collect()
    }

    /// Get tile bounds (x, y, width, height) in pixel coordinates.
    /// Tiles past the image edge have zero width or height.
    pub fn get_tile_bounds(&self, coord: TileCoord) -> (u32, u32, u32, u32) {
        let x = coord.x.saturating_mul(self.tile_size);
        let y = coord.y.saturating_mul(self.tile_size);
        let width = self.tile_size.min(self.surface.width().saturating_sub(x));
        let height = self.tile_size.min(self.surface.height().saturating_sub(y));
        (x, y, width, height)
    }

    /// Pixel bounding box (x, y, width, height) of the given tiles.
    /// Tiles outside the image are skipped; None if nothing remains.
    pub fn compute_tiles_bounding_box(&self, tiles: &[TileCoord]) -> Option<(u32, u32, u32, u32)> {
        let (min_x, min_y, max_x, max_y) = tiles
            .iter()
            .map(|&tile| self.get_tile_bounds(tile))
            .filter(|&(_, _, w, h)| w > 0 && h > 0)
            .fold(
                (u32::MAX, u32::MAX, 0u32, 0u32),
                |(min_x, min_y, max_x, max_y), (x, y, w, h)| {
                    (min_x.min(x), min_y.min(y), max_x.max(x + w), max_y.max(y + h))
                },
            );

        (max_x > min_x && max_y > min_y).then(|| (min_x, min_y, max_x - min_x, max_y - min_y))
    }
}
