/// Command-line parsing and batch icon output
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types for rendering and export
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Batch progress display
pub mod progress;
