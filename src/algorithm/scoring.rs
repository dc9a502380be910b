//! Placement cost of a color at an empty position
//!
//! Costs compare the color against the already filled cells around the
//! position. Lower is better and every cost is non-negative.

use crate::color::{Color, ColorMetric};
use crate::spatial::canvas::{Canvas, Position};
use crate::spatial::neighborhood::neighbors;

/// Cost function for placing a color at an empty position
///
/// Scorers are shared across threads while candidates are rated in parallel,
/// so `score` must not mutate state. Stateful scorers update themselves in
/// `record_placement`, which the engine calls after each commit.
pub trait PositionScorer: Send + Sync {
    /// Cost of placing `color` at `pos`; lower is better, never negative
    fn score(&self, canvas: &Canvas, pos: Position, color: Color) -> f64;

    /// Observe a committed placement
    fn record_placement(&mut self, _canvas: &Canvas, _pos: Position, _color: Color) {}
}

/// Which scorer implementation the engine uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoringStrategy {
    /// Rescan filled neighbors on every evaluation
    #[default]
    Exact,
    /// Compare against incrementally maintained neighbor means
    MeanCache,
}

/// Divide an accumulated distance by the squared count of contributing neighbors
///
/// Squaring favours positions surrounded by many filled cells over positions
/// touching a single one, which keeps the growth front compact instead of
/// branching into thin filaments. A count of zero is treated as one.
pub fn normalize(total_distance: f64, filled_neighbors: usize) -> f64 {
    let divisor = filled_neighbors.max(1) as f64;
    total_distance / (divisor * divisor)
}

/// Sums the distance to every filled neighbor
#[derive(Clone, Copy, Debug)]
pub struct ExactScorer {
    radius: usize,
    metric: ColorMetric,
}

impl ExactScorer {
    /// Create a scorer looking `radius` cells around each position
    pub const fn new(radius: usize, metric: ColorMetric) -> Self {
        Self { radius, metric }
    }
}

impl PositionScorer for ExactScorer {
    fn score(&self, canvas: &Canvas, pos: Position, color: Color) -> f64 {
        let sentinel = canvas.sentinel();
        let (width, height) = canvas.dimensions();

        let mut total = 0.0;
        let mut count = 0;
        for neighbor in neighbors(pos, self.radius, width, height) {
            match canvas.get(neighbor) {
                Some(filled) if filled != sentinel => {
                    total += self.metric.distance(color, filled);
                    count += 1;
                }
                _ => {}
            }
        }

        normalize(total, count)
    }
}
