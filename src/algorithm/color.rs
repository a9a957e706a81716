//! Color synthesis from a random stream
//!
//! Each synthesized color consumes exactly six draws from its role's stream:
//! one for hue, one for saturation and four for lightness.

use std::fmt;

use crate::io::configuration::{
    HUE_RANGE, LIGHTNESS_DRAWS, LIGHTNESS_SCALE, MIN_SATURATION, SATURATION_RANGE,
};
use crate::math::number_format::format_ecmascript_number;
use crate::random::{RandomStreams, StreamRole};

/// Color expressed as CSS `hsl()` components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    /// Hue in whole degrees, `[0, 360)`
    pub hue: u32,
    /// Saturation percentage, `[40, 100)`
    pub saturation: f64,
    /// Lightness percentage, nominally `[0, 100)` with a bell curve around 50
    pub lightness: f64,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue,
            format_ecmascript_number(self.saturation),
            format_ecmascript_number(self.lightness)
        )
    }
}

/// Color of one icon role
#[derive(Debug, Clone, PartialEq)]
pub enum IconColor {
    /// Derived from the role's random stream
    Synthesized(HslColor),
    /// Supplied verbatim by the caller
    Literal(String),
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Synthesized(color) => fmt::Display::fmt(color, f),
            Self::Literal(text) => f.write_str(text),
        }
    }
}

/// Foreground, background and spot colors of an icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconColors {
    /// Paints cells with value 1
    pub foreground: IconColor,
    /// Fills the whole canvas before any cell is painted
    pub background: IconColor,
    /// Paints cells with value 2
    pub spot: IconColor,
}

/// Draw a new color from `role`'s stream
// A fused multiply-add rounds differently and would change the legacy digits
#[allow(clippy::suboptimal_flops)]
pub fn synthesize_color(streams: &mut RandomStreams, role: StreamRole) -> HslColor {
    let hue = (streams.draw(role) * HUE_RANGE).floor() as u32;
    let saturation = streams.draw(role) * SATURATION_RANGE + MIN_SATURATION;

    let mut lightness_sum = 0.0;
    for _ in 0..LIGHTNESS_DRAWS {
        lightness_sum += streams.draw(role);
    }

    HslColor {
        hue,
        saturation,
        lightness: lightness_sum * LIGHTNESS_SCALE,
    }
}

/// Use `literal` when present, otherwise synthesize from `role`'s stream
///
/// No draws are consumed when a literal is supplied.
pub fn resolve_color(
    streams: &mut RandomStreams,
    role: StreamRole,
    literal: Option<&str>,
) -> IconColor {
    match literal {
        Some(text) => IconColor::Literal(text.to_string()),
        None => IconColor::Synthesized(synthesize_color(streams, role)),
    }
}
