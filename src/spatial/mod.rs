//! Spatial data structures for the growth canvas
//!
//! This module contains:
//! - The fixed-size canvas of placed colors
//! - Neighborhood iteration clamped to canvas bounds

/// Canvas storage and positions
pub mod canvas;
/// Neighborhood spans and iteration
pub mod neighborhood;

pub use canvas::{Canvas, Position};
