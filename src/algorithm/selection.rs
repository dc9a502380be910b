//! Candidate rating and randomized minimum selection

use crate::algorithm::scoring::PositionScorer;
use crate::color::Color;
use crate::io::configuration::PARALLEL_SCORING_THRESHOLD;
use crate::spatial::canvas::{Canvas, Position};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Frontier position paired with its placement cost
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatedPosition {
    /// Placement cost, lower is better
    pub score: f64,
    /// Candidate position
    pub position: Position,
}

/// Score every candidate for `color`
///
/// Evaluations are independent and read-only. With `parallel` set and enough
/// candidates they run on the rayon pool; the output order always matches
/// `candidates`, so the result does not depend on the thread count.
pub fn rate_positions(
    scorer: &dyn PositionScorer,
    canvas: &Canvas,
    candidates: &[Position],
    color: Color,
    parallel: bool,
) -> Vec<RatedPosition> {
    let rate = |&position: &Position| RatedPosition {
        score: scorer.score(canvas, position, color),
        position,
    };

    if parallel && candidates.len() >= PARALLEL_SCORING_THRESHOLD {
        candidates.par_iter().map(rate).collect()
    } else {
        candidates.iter().map(rate).collect()
    }
}

/// First candidate with the lowest score, in slice order
pub fn first_minimum(rated: &[RatedPosition]) -> Option<RatedPosition> {
    let mut best: Option<RatedPosition> = None;
    for candidate in rated {
        match best {
            Some(current) if candidate.score >= current.score => {}
            _ => best = Some(*candidate),
        }
    }
    best
}

/// Seeded random source for reproducible tie-breaking
///
/// Owned by a single engine and only ever used on the placement loop, never
/// from the parallel scoring workers.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffle `rated` and return its first minimum
    ///
    /// Shuffling first makes every candidate in a tied set equally likely to
    /// win, independent of frontier order.
    pub fn select_minimum(&mut self, rated: &mut [RatedPosition]) -> Option<RatedPosition> {
        rated.shuffle(&mut self.rng);
        first_minimum(rated)
    }
}
