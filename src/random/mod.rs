//! Deterministic pseudo-random number generation
//!
//! This module contains:
//! - The text-seeded xorshift generator
//! - The per-call table of named streams with fallback sharing

/// Named streams and fallback lookup
pub mod streams;
/// Text-seeded 32-bit xorshift generator
pub mod xorshift;

pub use streams::{RandomStreams, StreamRole};
pub use xorshift::XorshiftState;
