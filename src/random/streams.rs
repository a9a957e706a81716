//! Named random streams sharing a fallback state
//!
//! A generation call owns exactly one [`RandomStreams`] table. Roles that were
//! never seeded draw from the fallback state itself, so drawing on an unseeded
//! role advances the fallback sequence seen by every other unseeded role.

use crate::random::xorshift::XorshiftState;

/// Consumers of random values during icon generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamRole {
    /// Base stream seeded from the main seed
    Fallback,
    /// Pixel pattern cells
    Pattern,
    /// Foreground color
    Color,
    /// Background color
    BackgroundColor,
    /// Spot color
    SpotColor,
}

impl StreamRole {
    /// Every role, fallback first
    pub const ALL: [Self; 5] = [
        Self::Fallback,
        Self::Pattern,
        Self::Color,
        Self::BackgroundColor,
        Self::SpotColor,
    ];

    /// Legacy stream name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Pattern => "pattern",
            Self::Color => "color",
            Self::BackgroundColor => "bgcolor",
            Self::SpotColor => "spotcolor",
        }
    }

    /// Look up a role by its legacy stream name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }
}

/// Call-scoped table of xorshift states, one optional state per role
#[derive(Debug, Clone, Default)]
pub struct RandomStreams {
    fallback: XorshiftState,
    pattern: Option<XorshiftState>,
    color: Option<XorshiftState>,
    background_color: Option<XorshiftState>,
    spot_color: Option<XorshiftState>,
}

impl RandomStreams {
    /// Create an empty table where every role shares an all-zero fallback state
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly seeded state for `role`, replacing any previous state
    pub fn seed(&mut self, role: StreamRole, seed: &str) {
        let state = XorshiftState::from_seed(seed);
        match role {
            StreamRole::Fallback => self.fallback = state,
            StreamRole::Pattern => self.pattern = Some(state),
            StreamRole::Color => self.color = Some(state),
            StreamRole::BackgroundColor => self.background_color = Some(state),
            StreamRole::SpotColor => self.spot_color = Some(state),
        }
    }

    /// Whether `role` owns a state of its own
    pub const fn is_seeded(&self, role: StreamRole) -> bool {
        match role {
            StreamRole::Fallback => true,
            StreamRole::Pattern => self.pattern.is_some(),
            StreamRole::Color => self.color.is_some(),
            StreamRole::BackgroundColor => self.background_color.is_some(),
            StreamRole::SpotColor => self.spot_color.is_some(),
        }
    }

    /// Draw the next value for `role`, advancing the fallback state when the
    /// role was never seeded
    pub fn draw(&mut self, role: StreamRole) -> f64 {
        self.state_mut(role).draw()
    }

    /// Current state that a draw on `role` would advance
    pub fn state(&self, role: StreamRole) -> XorshiftState {
        let own = match role {
            StreamRole::Fallback => None,
            StreamRole::Pattern => self.pattern,
            StreamRole::Color => self.color,
            StreamRole::BackgroundColor => self.background_color,
            StreamRole::SpotColor => self.spot_color,
        };
        own.unwrap_or(self.fallback)
    }

    fn state_mut(&mut self, role: StreamRole) -> &mut XorshiftState {
        let own = match role {
            StreamRole::Fallback => None,
            StreamRole::Pattern => self.pattern.as_mut(),
            StreamRole::Color => self.color.as_mut(),
            StreamRole::BackgroundColor => self.background_color.as_mut(),
            StreamRole::SpotColor => self.spot_color.as_mut(),
        };
        match own {
            Some(state) => state,
            None => &mut self.fallback,
        }
    }
}
