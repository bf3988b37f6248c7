//! Coloring canvas session
//!
//! This module ties the fill engine together for one coloring page:
//! - The image, wrapped for dirty-tile tracking
//! - The boundary mask, computed once per loaded image
//! - The fill configuration and the currently selected fill color
//!
//! The caller owns the canvas and hands it to input handlers explicitly;
//! there is no global lookup.

mod fill_ops;
mod surface_ops;

use crayon_config::{DEFAULT_FILL_COLOR, FillConfig};
use tracing::debug;

use crate::boundary::{BoundaryMask, compute_boundary_mask, segment_outlines};
use crate::error::FillResult;
use crate::surface::Image;
use crate::tiles::TiledSurface;

/// A coloring page ready to receive fills
pub struct ColoringCanvas {
    /// Image plus dirty-tile state
    pub(crate) surface: TiledSurface,
    /// Outline pixels of the loaded image
    pub(crate) mask: BoundaryMask,
    /// Comparison settings
    pub(crate) config: FillConfig,
    /// Color used by the next fill
    pub(crate) fill_color: [f32; 4],
}

impl ColoringCanvas {
    /// Create a canvas for `image`, classifying its outline pixels once.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid or the image is empty.
    pub fn new(image: Image, config: FillConfig) -> FillResult<Self> {
        config.validate()?;
        let mask = Self::classify(&image, &config)?;
        let mut surface = TiledSurface::new(image, config.tile_size);
        surface.mark_all_dirty();

        Ok(Self {
            surface,
            mask,
            config,
            fill_color: DEFAULT_FILL_COLOR,
        })
    }

    /// Create a canvas from scanned or anti-aliased artwork, first reducing it
    /// to black outlines on white paper at `config.outline_threshold`
    pub fn from_artwork(artwork: &Image, config: FillConfig) -> FillResult<Self> {
        config.validate()?;
        let image = segment_outlines(artwork, config.outline_threshold)?;
        Self::new(image, config)
    }

    /// Segment `artwork` with the current outline threshold and load the result.
    /// On error the previous image and mask are kept.
    pub fn load_artwork(&mut self, artwork: &Image) -> FillResult<()> {
        let image = segment_outlines(artwork, self.config.outline_threshold)?;
        self.load_image(image)
    }

    /// Replace the image and recompute the boundary mask.
    /// On error the previous image and mask are kept.
    pub fn load_image(&mut self, image: Image) -> FillResult<()> {
        let mask = Self::classify(&image, &self.config)?;
        debug!(
            "Loaded {}x{} image, boundary mask invalidated",
            image.width(), image.height()
        );
        self.surface = TiledSurface::new(image, self.config.tile_size);
        self.surface.mark_all_dirty();
        self.mask = mask;
        Ok(())
    }

    /// Swap the configuration. The mask is recomputed only if the outline
    /// color, boundary tolerance or policy changed.
    pub fn set_config(&mut self, config: FillConfig) -> FillResult<()> {
        config.validate()?;
        if self.config.boundary_differs(&config) {
            self.mask = Self::classify(self.surface.surface(), &config)?;
            debug!("Boundary settings changed, mask recomputed");
        }
        if config.tile_size != self.config.tile_size {
            self.surface.set_tile_size(config.tile_size);
        }
        self.config = config;
        Ok(())
    }

    /// Get the current configuration
    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Set the color used by subsequent fills (pencil selection)
    pub fn set_fill_color(&mut self, color: [f32; 4]) {
        self.fill_color = color;
    }

    /// Get the current fill color
    pub fn fill_color(&self) -> [f32; 4] {
        self.fill_color
    }

    /// Get the cached boundary mask
    pub fn boundary_mask(&self) -> &BoundaryMask {
        &self.mask
    }

    fn classify(image: &Image, config: &FillConfig) -> FillResult<BoundaryMask> {
        compute_boundary_mask(
            image,
            config.boundary_color,
            config.tolerances.boundary,
            config.policy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FillError;
    use crate::types::{FillOutcome, PixelCoord, RejectReason};
    use crayon_config::{ComparisonPolicy, Tolerances};

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    const DARK_GRAY: [f32; 4] = [0.3, 0.3, 0.3, 1.0];

    fn page() -> Image {
        let mut image = Image::filled(4, 4, WHITE);
        for y in 0..4 {
            image.set_pixel(2, y, BLACK);
        }
        image
    }

    fn config() -> FillConfig {
        FillConfig::new(BLACK, 0.1)
    }

    #[test]
    fn test_canvas_creation() {
        let canvas = ColoringCanvas::new(page(), config()).unwrap();
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.boundary_mask().len(), 4);
        assert_eq!(canvas.fill_color(), DEFAULT_FILL_COLOR);
        // Freshly loaded image needs a full upload
        assert!(canvas.has_dirty_tiles());
    }

    #[test]
    fn test_canvas_rejects_invalid_config() {
        let config = config().with_tolerances(Tolerances::uniform(-1.0));
        assert!(matches!(
            ColoringCanvas::new(page(), config),
            Err(FillError::Config(_))
        ));
    }

    #[test]
    fn test_canvas_rejects_empty_image() {
        assert!(matches!(
            ColoringCanvas::new(Image::new(0, 0), config()),
            Err(FillError::EmptyImage)
        ));
    }

    #[test]
    fn test_load_image_recomputes_mask() {
        let mut canvas = ColoringCanvas::new(page(), config()).unwrap();
        let mut other = Image::filled(3, 3, WHITE);
        other.set_pixel(1, 1, BLACK);

        canvas.load_image(other).unwrap();
        assert_eq!(canvas.width(), 3);
        assert_eq!(canvas.boundary_mask().len(), 1);
        assert!(canvas.boundary_mask().contains(PixelCoord::new(1, 1)));
    }

    #[test]
    fn test_failed_load_keeps_previous_image() {
        let mut canvas = ColoringCanvas::new(page(), config()).unwrap();
        assert!(canvas.load_image(Image::new(0, 0)).is_err());
        assert_eq!(canvas.image(), &page());
        assert_eq!(canvas.boundary_mask().len(), 4);
    }

    #[test]
    fn test_set_config_recomputes_only_on_boundary_change() {
        let mut image = page();
        image.set_pixel(0, 0, DARK_GRAY);
        let mut canvas = ColoringCanvas::new(image, config()).unwrap();
        assert_eq!(canvas.boundary_mask().len(), 4);

        // Region tolerance does not affect the mask
        let mut looser_region = config();
        looser_region.tolerances.region = 0.5;
        canvas.set_config(looser_region).unwrap();
        assert_eq!(canvas.boundary_mask().len(), 4);

        // Wider boundary tolerance picks up the dark gray pixel
        let mut looser_boundary = config();
        looser_boundary.tolerances.boundary = 0.4;
        canvas.set_config(looser_boundary).unwrap();
        assert_eq!(canvas.boundary_mask().len(), 5);
    }

    #[test]
    fn test_set_config_tile_size() {
        let mut canvas = ColoringCanvas::new(page(), config()).unwrap();
        canvas.take_dirty_tiles();

        let mut small_tiles = config();
        small_tiles.tile_size = 2;
        canvas.set_config(small_tiles).unwrap();
        assert_eq!(canvas.tile_size(), 2);
        assert_eq!(canvas.image(), &page());
        assert_eq!(canvas.take_dirty_tiles().len(), 4);
    }

    #[test]
    fn test_set_config_extended_policy() {
        let mut canvas = ColoringCanvas::new(page(), config()).unwrap();
        canvas
            .set_config(config().with_policy(ComparisonPolicy::Extended))
            .unwrap();
        assert_eq!(canvas.config().policy, ComparisonPolicy::Extended);
        assert_eq!(canvas.boundary_mask().len(), 4);
    }

    /// Soft gray line at x=2 on off-white paper, as a scan would look
    fn scanned_page() -> Image {
        let mut image = Image::filled(4, 4, [0.9, 0.88, 0.85, 1.0]);
        for y in 0..4 {
            image.set_pixel(2, y, [0.35, 0.35, 0.4, 1.0]);
        }
        image
    }

    #[test]
    fn test_from_artwork_segments_with_threshold() {
        let canvas = ColoringCanvas::from_artwork(&scanned_page(), config()).unwrap();
        assert_eq!(canvas.image(), &page());
        assert_eq!(canvas.boundary_mask().len(), 4);

        // A threshold below the line's gray leaves no outline at all
        let mut low = config();
        low.outline_threshold = 0.2;
        let canvas = ColoringCanvas::from_artwork(&scanned_page(), low).unwrap();
        assert!(canvas.boundary_mask().is_empty());
    }

    #[test]
    fn test_load_artwork() {
        let mut canvas = ColoringCanvas::new(Image::filled(2, 2, WHITE), config()).unwrap();
        canvas.load_artwork(&scanned_page()).unwrap();
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.boundary_mask().len(), 4);
        assert_eq!(
            canvas.fill_at(PixelCoord::new(0, 0)).unwrap(),
            FillOutcome::Applied(8)
        );
    }

    #[test]
    fn test_from_artwork_rejects_invalid_threshold() {
        let mut config = config();
        config.outline_threshold = f32::NAN;
        assert!(matches!(
            ColoringCanvas::from_artwork(&scanned_page(), config),
            Err(FillError::Config(_))
        ));
    }

    #[test]
    fn test_fill_with_selected_color() {
        let mut canvas = ColoringCanvas::new(page(), config()).unwrap();
        let green = [0.0, 1.0, 0.0, 1.0];
        canvas.set_fill_color(green);

        let outcome = canvas.fill_at(PixelCoord::new(3, 3)).unwrap();
        assert_eq!(outcome, FillOutcome::Applied(4));
        assert_eq!(canvas.get_pixel(3, 0), Some(green));

        assert_eq!(
            canvas.fill_at(PixelCoord::new(3, 3)).unwrap(),
            FillOutcome::Rejected(RejectReason::AlreadyFilled)
        );
    }
}
