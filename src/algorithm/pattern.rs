//! Pixel pattern synthesis from the pattern stream
//!
//! Both policies consume exactly one draw per generated cell, so the stream
//! position after a row is independent of the values drawn.

use crate::io::configuration::{
    DEFAULT_BACKGROUND_RATIO, DEFAULT_FOREGROUND_RATIO, DEFAULT_SPOT_RATIO,
    UNWEIGHTED_PATTERN_MULTIPLIER,
};
use crate::math::probability::{cumulative_sum, select_bucket};
use crate::random::{RandomStreams, StreamRole};
use crate::spatial::{PixelGrid, PixelValue};

/// Relative weights of the three pixel values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRatios {
    /// Weight of background cells
    pub background: f64,
    /// Weight of foreground cells
    pub foreground: f64,
    /// Weight of spot cells
    pub spot: f64,
}

impl Default for PatternRatios {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND_RATIO,
            foreground: DEFAULT_FOREGROUND_RATIO,
            spot: DEFAULT_SPOT_RATIO,
        }
    }
}

impl PatternRatios {
    /// Running totals in background, foreground, spot order
    pub fn cumulative(&self) -> Vec<f64> {
        cumulative_sum(&[self.background, self.foreground, self.spot])
    }
}

/// How cell values are derived from draws
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PatternPolicy {
    /// `floor(draw * 2.3)`
    #[default]
    Unweighted,
    /// First cumulative bucket above `draw * total`
    Weighted(PatternRatios),
}

/// Generate a mirrored grid of `size` cells per side
///
/// Draws `ceil(size / 2)` values per row from the pattern stream, top to
/// bottom. A weighted draw that lands in no bucket becomes background.
pub fn synthesize_pattern(
    streams: &mut RandomStreams,
    size: usize,
    policy: PatternPolicy,
) -> PixelGrid {
    match policy {
        PatternPolicy::Unweighted => PixelGrid::from_half_rows(size, || {
            let draw = streams.draw(StreamRole::Pattern);
            PixelValue::from_index((draw * UNWEIGHTED_PATTERN_MULTIPLIER).floor() as usize)
        }),
        PatternPolicy::Weighted(ratios) => {
            let cumulative = ratios.cumulative();
            PixelGrid::from_half_rows(size, || {
                let draw = streams.draw(StreamRole::Pattern);
                select_bucket(&cumulative, draw)
                    .map_or(PixelValue::Background, PixelValue::from_index)
            })
        }
    }
}
