/// Incremental neighbor aggregates for constant-time scoring
pub mod cache;
/// Placement engine and run orchestration
pub mod executor;
/// Frontier of growable positions
pub mod frontier;
/// Position scoring against filled neighbors
pub mod scoring;
/// Candidate rating and randomized selection
pub mod selection;
