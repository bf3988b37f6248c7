//! CPU pixel buffer for coloring pages

use crate::error::{FillError, FillResult};
use crate::types::PixelCoord;

/// An RGBA image owned by the caller and repainted in place by fills.
/// Stores pixels as [f32; 4] with channels in 0.0..=1.0, row 0 at the top.
///
/// The buffer always holds exactly `width * height` pixels; the dimensions
/// are fixed at construction.
///
/// ```compile_fail
/// let mut image = fill::Image::filled(4, 4, [1.0; 4]);
/// image.width = 8;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] as f32
    pixels: Vec<[f32; 4]>,
}

impl Image {
    /// Create a new image with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0.0, 0.0, 0.0, 0.0])
    }

    /// Create a new image where every pixel is `color`
    pub fn filled(width: u32, height: u32, color: [f32; 4]) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; pixel_count],
        }
    }

    /// Wrap an existing row-major pixel buffer
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> FillResult<Self> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(FillError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert from tightly packed 8-bit RGBA bytes
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> FillResult<Self> {
        let expected = (width as usize) * (height as usize);
        if bytes.len() != expected * 4 {
            return Err(FillError::BufferSizeMismatch {
                expected,
                actual: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| {
                [
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                    p[3] as f32 / 255.0,
                ]
            })
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Convert to tightly packed 8-bit RGBA bytes (rounded, clamped)
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| p.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
            .collect()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if the image has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Clear the image to a solid color
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    /// Check whether a coordinate lies inside the image
    #[inline]
    pub fn contains(&self, coord: PixelCoord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Buffer index of a coordinate, None if out of bounds
    #[inline]
    pub fn index_of(&self, coord: PixelCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some((coord.y as usize) * (self.width as usize) + (coord.x as usize))
    }

    /// Coordinate of a buffer index
    #[inline]
    pub fn coord_of(&self, index: usize) -> PixelCoord {
        let width = self.width as usize;
        PixelCoord::new((index % width) as u32, (index / width) as u32)
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index_of(PixelCoord::new(x, y))
            .map(|index| self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(index) = self.index_of(PixelCoord::new(x, y)) {
            self.pixels[index] = color;
        }
    }

    /// Get raw pixel data for GPU upload
    /// Returns the pixel data as a byte slice suitable for an Rgba32Float texture
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[f32; 4]] {
        &mut self.pixels
    }
}

#[cfg(feature = "image")]
impl From<&image::RgbaImage> for Image {
    fn from(source: &image::RgbaImage) -> Self {
        let pixels = source
            .pixels()
            .map(|p| p.0.map(|c| c as f32 / 255.0))
            .collect();
        Self {
            width: source.width(),
            height: source.height(),
            pixels,
        }
    }
}

#[cfg(feature = "image")]
impl Image {
    /// Convert back to an 8-bit image for saving or texture upload
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let pixel = self.get_pixel(x, y).unwrap_or_default();
            image::Rgba(pixel.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
        })
    }
}
