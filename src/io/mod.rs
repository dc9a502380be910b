//! Input/output collaborators around the placement engine

/// Command-line parsing and run orchestration
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Preview smoothing of empty regions
pub mod embellish;
/// Error types
pub mod error;
/// PNG and PPM export
pub mod image;
/// Progress display and logging
pub mod progress;
/// Initial frontier construction
pub mod seeding;
/// Periodic snapshot output
pub mod snapshot;
