//! Greedy frontier-growth generation of images that use every palette color exactly once
//!
//! Colors from a quantized, hue-sorted palette are placed one at a time at
//! the frontier position whose filled neighbors they match best, producing
//! organic, crystal-like color growth.

#![forbid(unsafe_code)]

/// Placement engine, frontier bookkeeping and position scoring
pub mod algorithm;
/// Color representation, metrics and palette generation
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Canvas storage and neighborhoods
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
