//! Generation constants and runtime configuration defaults

// Icon geometry
/// Cells per side when no size is given
pub const DEFAULT_SIZE: usize = 8;
/// Output pixels per cell when no scale is given
pub const DEFAULT_SCALE: usize = 4;
/// Largest accepted cells per side; larger requests are clamped
pub const MAX_SIZE: usize = 4096;

// Weighted pattern ratios
/// Default background weight
pub const DEFAULT_BACKGROUND_RATIO: f64 = 60.0;
/// Default foreground weight
pub const DEFAULT_FOREGROUND_RATIO: f64 = 30.0;
/// Default spot weight
pub const DEFAULT_SPOT_RATIO: f64 = 10.0;

// Gives background and foreground 1/2.3 each and spot the remaining 13%
/// Draw multiplier for the unweighted pattern policy
pub const UNWEIGHTED_PATTERN_MULTIPLIER: f64 = 2.3;

// Color synthesis
/// Hue spans the whole circle
pub const HUE_RANGE: f64 = 360.0;
/// Lowest saturation percentage, avoids greyish colors
pub const MIN_SATURATION: f64 = 40.0;
/// Width of the saturation band above the minimum
pub const SATURATION_RANGE: f64 = 60.0;
/// Lightness is the sum of this many draws, giving a bell curve around 50%
pub const LIGHTNESS_DRAWS: usize = 4;
/// Scale applied to the lightness draw sum
pub const LIGHTNESS_SCALE: f64 = 25.0;

// Random seeds
/// Random seeds are `floor(random() * RANDOM_SEED_SPAN)` in hexadecimal
pub const RANDOM_SEED_SPAN: f64 = 1e16;

// Output settings
/// Largest canvas area in pixels that rendering will allocate (16384 x 16384)
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;
/// Extension of exported icons
pub const OUTPUT_EXTENSION: &str = "png";
/// File stem used when a seed has no usable characters
pub const FALLBACK_FILE_STEM: &str = "blockie";
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
