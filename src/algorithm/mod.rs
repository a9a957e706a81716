/// Color synthesis and role colors
pub mod color;
/// Icon generation entry point
pub mod generator;
/// Pattern policies and mirrored grid synthesis
pub mod pattern;
/// Option resolution and stream seeding
pub mod resolver;
