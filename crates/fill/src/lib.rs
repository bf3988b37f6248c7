//! Crayon fill engine - boundary-constrained region fill for coloring pages
//!
//! This crate provides:
//! - [`surface::Image`] - CPU RGBA pixel buffer, channels in 0.0..=1.0
//! - [`color`] - Tolerance-based color-similarity predicate
//! - [`boundary`] - One-time outline classification into a [`BoundaryMask`]
//! - [`region`] - Breadth-first region fill bounded by the mask
//! - [`tiles`] - Dirty tile tracking for texture re-upload
//! - [`placement`] - World-space tap to pixel mapping
//! - [`canvas`] - A caller-owned coloring page session tying it together
//!
//! # Example
//!
//! ```
//! use fill::{FillOutcome, FillRequest, Image, PixelCoord, compute_boundary_mask, fill};
//! use fill::crayon_config::{ComparisonPolicy, Tolerances};
//!
//! let white = [1.0, 1.0, 1.0, 1.0];
//! let black = [0.0, 0.0, 0.0, 1.0];
//! let red = [1.0, 0.0, 0.0, 1.0];
//!
//! // 4x4 page with an outline at x = 2
//! let mut image = Image::filled(4, 4, white);
//! for y in 0..4 {
//!     image.set_pixel(2, y, black);
//! }
//!
//! let mask = compute_boundary_mask(&image, black, 0.1, ComparisonPolicy::Channel).unwrap();
//! let request = FillRequest::new(PixelCoord::new(0, 0), red)
//!     .with_tolerances(Tolerances::uniform(0.1));
//!
//! assert_eq!(fill(&mut image, &mask, &request).unwrap(), FillOutcome::Applied(8));
//! assert_eq!(image.get_pixel(3, 0), Some(white));
//! ```

pub mod boundary;
pub mod canvas;
pub mod color;
pub mod error;
pub mod placement;
pub mod region;
pub mod surface;
pub mod tiles;
pub mod types;

pub use boundary::*;
pub use canvas::*;
pub use color::*;
pub use error::{FillError, FillResult};
pub use placement::*;
pub use region::*;
pub use surface::*;
pub use tiles::*;
pub use types::*;

pub use crayon_config;
