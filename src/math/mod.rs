//! Mathematical utilities for pattern and color generation

/// HSL to RGB conversion for rendering
pub mod color_space;
/// ECMAScript-compatible number formatting for color strings
pub mod number_format;
/// Cumulative distributions and weighted bucket selection
pub mod probability;
