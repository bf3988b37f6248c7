//! Tile management and dirty tracking for coloring pages

mod data_access;
mod dirty_tracking;

use crate::surface::Image;
use crayon_config::DEFAULT_TILE_SIZE;
use std::collections::HashSet;

/// Tile coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
}

/// An image split into tiles, tracking which tiles fills have modified
/// so the renderer can re-upload only those
pub struct TiledSurface {
    pub(crate) surface: Image,
    pub(crate) tile_size: u32,
    tiles_x: u32,
    tiles_y: u32,
    pub(crate) dirty_tiles: HashSet<TileCoord>,
}

impl TiledSurface {
    /// Wrap an image with the given tile size (clamped to at least 1)
    pub fn new(surface: Image, tile_size: u32) -> Self {
        let tile_size = tile_size.max(1);
        let tiles_x = surface.width().div_ceil(tile_size);
        let tiles_y = surface.height().div_ceil(tile_size);

        Self {
            surface,
            tile_size,
            tiles_x,
            tiles_y,
            dirty_tiles: HashSet::new(),
        }
    }

    /// Wrap an image with the default tile size
    pub fn with_default_tile_size(surface: Image) -> Self {
        Self::new(surface, DEFAULT_TILE_SIZE)
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of tiles in x direction
    #[inline]
    pub fn tiles_x(&self) -> u32 {
        self.tiles_x
    }

    /// Number of tiles in y direction
    #[inline]
    pub fn tiles_y(&self) -> u32 {
        self.tiles_y
    }

    /// Re-grid with a new tile size. Every tile becomes dirty.
    pub fn set_tile_size(&mut self, tile_size: u32) {
        self.tile_size = tile_size.max(1);
        self.tiles_x = self.surface.width().div_ceil(self.tile_size);
        self.tiles_y = self.surface.height().div_ceil(self.tile_size);
        self.dirty_tiles.clear();
        self.mark_all_dirty();
    }

    #[inline]
    pub fn surface(&self) -> &Image {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut Image {
        &mut self.surface
    }

    /// Give the image back, dropping dirty state
    pub fn into_surface(self) -> Image {
        self.surface
    }
}
