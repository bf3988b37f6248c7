//! Dirty tile tracking for incremental texture upload

use tracing::debug;

use super::{TileCoord, TiledSurface};

impl TiledSurface {
    /// Mark a pixel as modified (marks containing tile dirty)
    #[inline]
    pub fn mark_dirty(&mut self, x: u32, y: u32) {
        if x >= self.surface.width() || y >= self.surface.height() {
            return;
        }
        let tile_x = x / self.tile_size;
        let tile_y = y / self.tile_size;
        self.dirty_tiles.insert(TileCoord { x: tile_x, y: tile_y });
    }

    /// Mark the tiles holding the given buffer indices as dirty
    pub fn mark_indices_dirty(&mut self, indices: &[usize]) {
        let tiles_before = self.dirty_tiles.len();
        for &index in indices {
            let coord = self.surface.coord_of(index);
            self.mark_dirty(coord.x, coord.y);
        }
        debug!(
            "mark_indices_dirty: {} pixels -> {} new tiles (total {})",
            indices.len(),
            self.dirty_tiles.len() - tiles_before,
            self.dirty_tiles.len()
        );
    }

    /// Mark every tile dirty (after loading a new image)
    pub fn mark_all_dirty(&mut self) {
        for ty in 0..self.tiles_y() {
            for tx in 0..self.tiles_x() {
                self.dirty_tiles.insert(TileCoord { x: tx, y: ty });
            }
        }
    }

    /// Get all dirty tiles and clear the dirty set
    pub fn take_dirty_tiles(&mut self) -> Vec<TileCoord> {
        self.dirty_tiles.drain().collect()
    }

    #[inline]
    pub fn has_dirty_tiles(&self) -> bool {
        !self.dirty_tiles.is_empty()
    }

    #[inline]
    pub fn dirty_tile_count(&self) -> usize {
        self.dirty_tiles.len()
    }
}
