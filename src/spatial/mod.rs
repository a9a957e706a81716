//! Spatial data structures for icon pixels
//!
//! This module contains the square pixel grid and its row mirroring.

/// Pixel values, row mirroring and the square grid
pub mod grid;

pub use grid::{PixelGrid, PixelValue};
