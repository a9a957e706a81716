//! Option resolution and stream seeding
//!
//! Turns a partial [`IconOptions`] into a complete [`IconConfig`], seeding a
//! fresh stream table along the way. Resolution never fails: every field has a
//! generated or default fallback. Empty strings and zero sizes count as unset,
//! while an explicit zero ratio is a real override. Sizes above [`MAX_SIZE`]
//! are clamped to it.

use crate::algorithm::color::{IconColors, resolve_color};
use crate::algorithm::pattern::{PatternPolicy, PatternRatios};
use crate::io::configuration::{DEFAULT_SCALE, DEFAULT_SIZE, MAX_SIZE, RANDOM_SEED_SPAN};
use crate::random::{RandomStreams, StreamRole};

/// Caller-supplied icon options, every field optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconOptions {
    /// Base seed; a random hexadecimal seed is generated when absent
    pub seed: Option<String>,
    /// Seed for the pattern stream
    pub pattern_seed: Option<String>,
    /// Seed for the foreground color stream
    pub color_seed: Option<String>,
    /// Seed for the background color stream
    pub background_color_seed: Option<String>,
    /// Seed for the spot color stream
    pub spot_color_seed: Option<String>,
    /// Cells per side
    pub size: Option<usize>,
    /// Output pixels per cell
    pub scale: Option<usize>,
    /// Literal foreground color
    pub color: Option<String>,
    /// Literal background color
    pub background_color: Option<String>,
    /// Literal spot color
    pub spot_color: Option<String>,
    /// Foreground weight for the weighted pattern policy
    pub color_ratio: Option<f64>,
    /// Background weight for the weighted pattern policy
    pub background_color_ratio: Option<f64>,
    /// Spot weight for the weighted pattern policy
    pub spot_color_ratio: Option<f64>,
}

impl IconOptions {
    /// Options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base seed
    #[must_use]
    pub fn seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the pattern stream seed
    #[must_use]
    pub fn pattern_seed(mut self, seed: impl Into<String>) -> Self {
        self.pattern_seed = Some(seed.into());
        self
    }

    /// Set the foreground color stream seed
    #[must_use]
    pub fn color_seed(mut self, seed: impl Into<String>) -> Self {
        self.color_seed = Some(seed.into());
        self
    }

    /// Set the background color stream seed
    #[must_use]
    pub fn background_color_seed(mut self, seed: impl Into<String>) -> Self {
        self.background_color_seed = Some(seed.into());
        self
    }

    /// Set the spot color stream seed
    #[must_use]
    pub fn spot_color_seed(mut self, seed: impl Into<String>) -> Self {
        self.spot_color_seed = Some(seed.into());
        self
    }

    /// Set the number of cells per side
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the number of output pixels per cell
    #[must_use]
    pub const fn scale(mut self, scale: usize) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set a literal foreground color
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set a literal background color
    #[must_use]
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set a literal spot color
    #[must_use]
    pub fn spot_color(mut self, color: impl Into<String>) -> Self {
        self.spot_color = Some(color.into());
        self
    }

    /// Set the foreground weight
    #[must_use]
    pub const fn color_ratio(mut self, ratio: f64) -> Self {
        self.color_ratio = Some(ratio);
        self
    }

    /// Set the background weight
    #[must_use]
    pub const fn background_color_ratio(mut self, ratio: f64) -> Self {
        self.background_color_ratio = Some(ratio);
        self
    }

    /// Set the spot weight
    #[must_use]
    pub const fn spot_color_ratio(mut self, ratio: f64) -> Self {
        self.spot_color_ratio = Some(ratio);
        self
    }

    /// Pattern policy implied by the ratio fields
    ///
    /// Any supplied ratio selects the weighted policy; missing ratios take
    /// their defaults.
    pub fn pattern_policy(&self) -> PatternPolicy {
        if self.color_ratio.is_none()
            && self.background_color_ratio.is_none()
            && self.spot_color_ratio.is_none()
        {
            return PatternPolicy::Unweighted;
        }

        let defaults = PatternRatios::default();
        PatternPolicy::Weighted(PatternRatios {
            background: self.background_color_ratio.unwrap_or(defaults.background),
            foreground: self.color_ratio.unwrap_or(defaults.foreground),
            spot: self.spot_color_ratio.unwrap_or(defaults.spot),
        })
    }
}

/// Fully resolved icon configuration
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Base seed feeding the fallback stream
    pub seed: String,
    /// Pattern stream seed, if the stream has its own state
    pub pattern_seed: Option<String>,
    /// Foreground color stream seed, if the stream has its own state
    pub color_seed: Option<String>,
    /// Background color stream seed, if the stream has its own state
    pub background_color_seed: Option<String>,
    /// Spot color stream seed, if the stream has its own state
    pub spot_color_seed: Option<String>,
    /// Cells per side, at most [`MAX_SIZE`]
    pub size: usize,
    /// Output pixels per cell
    pub scale: usize,
    /// Role colors
    pub colors: IconColors,
    /// Cell value policy
    pub policy: PatternPolicy,
}

impl IconConfig {
    /// Seed whose state a draw on `role` starts from
    ///
    /// Roles without their own seed report the base seed they fall back to.
    pub fn seed_for(&self, role: StreamRole) -> &str {
        let own = match role {
            StreamRole::Fallback => None,
            StreamRole::Pattern => self.pattern_seed.as_deref(),
            StreamRole::Color => self.color_seed.as_deref(),
            StreamRole::BackgroundColor => self.background_color_seed.as_deref(),
            StreamRole::SpotColor => self.spot_color_seed.as_deref(),
        };
        own.unwrap_or(&self.seed)
    }

    /// Side length of the rendered image in pixels
    pub const fn pixel_size(&self) -> usize {
        self.size.saturating_mul(self.scale)
    }
}

/// Generate a random base seed as lowercase hexadecimal
pub fn random_seed() -> String {
    let value = (rand::random::<f64>() * RANDOM_SEED_SPAN).floor() as u64;
    format!("{value:x}")
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|text| !text.is_empty()).cloned()
}

/// Resolve `options` and seed `streams` for a single generation
///
/// `streams` should be fresh. Colors are synthesized here in foreground,
/// background, spot order, so unseeded color roles advance the fallback stream
/// before the pattern is drawn.
pub fn resolve(options: &IconOptions, streams: &mut RandomStreams) -> IconConfig {
    let seed = non_empty(options.seed.as_ref()).unwrap_or_else(random_seed);
    streams.seed(StreamRole::Fallback, &seed);

    let role_seeds = [
        (StreamRole::Pattern, non_empty(options.pattern_seed.as_ref())),
        (StreamRole::Color, non_empty(options.color_seed.as_ref())),
        (
            StreamRole::BackgroundColor,
            non_empty(options.background_color_seed.as_ref()),
        ),
        (StreamRole::SpotColor, non_empty(options.spot_color_seed.as_ref())),
    ];
    for (role, role_seed) in &role_seeds {
        if let Some(text) = role_seed {
            streams.seed(*role, text);
        }
    }
    let [
        (_, pattern_seed),
        (_, color_seed),
        (_, background_color_seed),
        (_, spot_color_seed),
    ] = role_seeds;

    let size = options
        .size
        .filter(|&size| size > 0)
        .map_or(DEFAULT_SIZE, |size| size.min(MAX_SIZE));
    let scale = options.scale.filter(|&scale| scale > 0).unwrap_or(DEFAULT_SCALE);

    let foreground = resolve_color(
        streams,
        StreamRole::Color,
        non_empty(options.color.as_ref()).as_deref(),
    );
    let background = resolve_color(
        streams,
        StreamRole::BackgroundColor,
        non_empty(options.background_color.as_ref()).as_deref(),
    );
    let spot = resolve_color(
        streams,
        StreamRole::SpotColor,
        non_empty(options.spot_color.as_ref()).as_deref(),
    );

    IconConfig {
        seed,
        pattern_seed,
        color_seed,
        background_color_seed,
        spot_color_seed,
        size,
        scale,
        colors: IconColors {
            foreground,
            background,
            spot,
        },
        policy: options.pattern_policy(),
    }
}
