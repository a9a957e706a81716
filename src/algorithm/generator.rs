//! Icon generation entry point
//!
//! Each call owns its stream table from start to finish. No state survives
//! between calls, so concurrent generations cannot observe each other.

use crate::algorithm::color::IconColors;
use crate::algorithm::pattern::synthesize_pattern;
use crate::algorithm::resolver::{IconConfig, IconOptions, resolve};
use crate::random::RandomStreams;
use crate::spatial::PixelGrid;

/// Generated icon: resolved configuration plus pixel grid
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    config: IconConfig,
    grid: PixelGrid,
}

impl Icon {
    /// Resolved configuration the icon was generated from
    pub const fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Base seed, including generated ones
    pub fn seed(&self) -> &str {
        &self.config.seed
    }

    /// Cells per side
    pub const fn size(&self) -> usize {
        self.config.size
    }

    /// Output pixels per cell
    pub const fn scale(&self) -> usize {
        self.config.scale
    }

    /// Foreground, background and spot colors
    pub const fn colors(&self) -> &IconColors {
        &self.config.colors
    }

    /// Pixel grid
    pub const fn grid(&self) -> &PixelGrid {
        &self.grid
    }
}

/// Generate an icon from `options`
///
/// Identical options with a seed always produce identical icons.
pub fn generate(options: &IconOptions) -> Icon {
    let mut streams = RandomStreams::new();
    let config = resolve(options, &mut streams);
    let grid = synthesize_pattern(&mut streams, config.size, config.policy);
    Icon { config, grid }
}
