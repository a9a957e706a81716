//! Deterministic pixel-art identicons generated from text seeds
//!
//! A seed feeds a text-seeded xorshift generator split into named streams.
//! Colors and a horizontally mirrored pixel pattern are drawn from those
//! streams, so the same seed always yields the same icon.
//!
//! ```
//! use blockies::{IconOptions, generate};
//!
//! let icon = generate(&IconOptions::new().seed("test"));
//! assert_eq!(icon.grid().values().len(), 64);
//! assert!(icon.grid().is_mirrored());
//! ```

#![forbid(unsafe_code)]

/// Color, pattern and configuration synthesis plus the generation entry point
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for probability, color spaces and number formatting
pub mod math;
/// Text-seeded pseudo-random streams
pub mod random;
/// Pixel grid storage and row mirroring
pub mod spatial;

pub use algorithm::color::{HslColor, IconColor, IconColors};
pub use algorithm::generator::{Icon, generate};
pub use algorithm::resolver::{IconConfig, IconOptions};
pub use io::error::{IconError, Result};
pub use spatial::{PixelGrid, PixelValue};
