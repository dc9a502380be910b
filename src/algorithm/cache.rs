//! Incrementally maintained neighbor aggregates for constant-time scoring
//!
//! Every cell keeps the channel sums and count of its filled neighbors. A
//! commit adds the new color to the aggregates of the cells around it, so a
//! score lookup no longer rescans the neighborhood. Scores compare the color
//! against the neighbor mean rather than summing per-neighbor distances,
//! which approximates [`ExactScorer`](crate::algorithm::scoring::ExactScorer)
//! while keeping the same squared-count normalization.

use crate::algorithm::scoring::{PositionScorer, normalize};
use crate::color::{Color, ColorMetric};
use crate::spatial::canvas::{Canvas, Position};
use crate::spatial::neighborhood::neighbors;
use ndarray::Array2;

/// Channel sums and count of the filled cells around one position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborAggregate {
    /// Per-channel sums in storage order
    pub sum: [u32; 3],
    /// Number of filled neighbors
    pub count: u32,
}

impl NeighborAggregate {
    /// Add one neighbor color
    pub fn add(&mut self, color: Color) {
        for (sum, channel) in self.sum.iter_mut().zip(color.channels()) {
            *sum += u32::from(channel);
        }
        self.count += 1;
    }

    /// Mean neighbor color, or `None` without filled neighbors
    pub fn mean(&self) -> Option<[f64; 3]> {
        if self.count == 0 {
            return None;
        }
        let count = f64::from(self.count);
        Some(self.sum.map(|s| f64::from(s) / count))
    }
}

/// Usage counters for the aggregate cache
#[derive(Default, Debug, Clone, Copy)]
pub struct CacheStats {
    /// Number of commits folded into the aggregates
    pub placements: usize,
    /// Number of aggregate cells updated
    pub cell_updates: usize,
}

/// Scorer backed by per-cell neighbor aggregates
#[derive(Clone, Debug)]
pub struct MeanCacheScorer {
    radius: usize,
    metric: ColorMetric,
    aggregates: Array2<NeighborAggregate>,

    /// Cache maintenance statistics
    pub stats: CacheStats,
}

impl MeanCacheScorer {
    /// Build aggregates for every cell already filled on `canvas`
    pub fn from_canvas(canvas: &Canvas, radius: usize, metric: ColorMetric) -> Self {
        let mut scorer = Self {
            radius,
            metric,
            aggregates: Array2::default((canvas.height(), canvas.width())),
            stats: CacheStats::default(),
        };
        let sentinel = canvas.sentinel();
        for (pos, color) in canvas.pixels() {
            if color != sentinel {
                scorer.fold_in(canvas, pos, color);
            }
        }
        scorer
    }

    /// Aggregate currently stored for `pos`
    pub fn aggregate(&self, pos: Position) -> Option<NeighborAggregate> {
        self.aggregates.get([pos.y, pos.x]).copied()
    }

    fn fold_in(&mut self, canvas: &Canvas, pos: Position, color: Color) {
        let (width, height) = canvas.dimensions();
        for neighbor in neighbors(pos, self.radius, width, height) {
            if let Some(aggregate) = self.aggregates.get_mut([neighbor.y, neighbor.x]) {
                aggregate.add(color);
                self.stats.cell_updates += 1;
            }
        }
        self.stats.placements += 1;
    }
}

impl PositionScorer for MeanCacheScorer {
    fn score(&self, _canvas: &Canvas, pos: Position, color: Color) -> f64 {
        let Some(aggregate) = self.aggregate(pos) else {
            return 0.0;
        };
        aggregate.mean().map_or(0.0, |mean| {
            let count = aggregate.count as usize;
            normalize(
                count as f64 * self.metric.distance_to_mean(color, mean),
                count,
            )
        })
    }

    fn record_placement(&mut self, canvas: &Canvas, pos: Position, color: Color) {
        self.fold_in(canvas, pos, color);
    }
}
