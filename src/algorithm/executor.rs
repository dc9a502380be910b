//! Placement engine driving frontier growth from seeds to a filled canvas

use crate::{
    algorithm::cache::MeanCacheScorer,
    algorithm::frontier::FrontierSet,
    algorithm::scoring::{ExactScorer, PositionScorer, ScoringStrategy},
    algorithm::selection::{RandomSelector, rate_positions},
    color::palette::PaletteQueue,
    color::{Color, ColorMetric},
    io::configuration::{DEFAULT_NEIGHBORHOOD_RADIUS, DEFAULT_SEED, MAX_NEIGHBORHOOD_RADIUS},
    io::error::{AlgorithmError, Result, computation_error, invalid_parameter},
    spatial::canvas::{Canvas, Position},
};
use tracing::debug;

/// Parameters controlling scoring, growth and tie-breaking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Neighborhood radius used for both scoring and frontier growth
    pub radius: usize,
    /// Color distance used by the scorer
    pub metric: ColorMetric,
    /// Scorer implementation
    pub scoring: ScoringStrategy,
    /// Seed of the tie-breaking random source
    pub placement_seed: u64,
    /// Whether candidate scoring may run on the rayon pool
    pub parallel_scoring: bool,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_NEIGHBORHOOD_RADIUS,
            metric: ColorMetric::default(),
            scoring: ScoringStrategy::default(),
            placement_seed: DEFAULT_SEED,
            parallel_scoring: false,
        }
    }
}

impl GrowthConfig {
    /// Check the configuration can drive a run
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the radius is zero or above the supported maximum
    pub fn validate(&self) -> Result<()> {
        if self.radius == 0 || self.radius > MAX_NEIGHBORHOOD_RADIUS {
            return Err(invalid_parameter(
                "radius",
                &self.radius,
                &format!("must be between 1 and {MAX_NEIGHBORHOOD_RADIUS}"),
            ));
        }
        Ok(())
    }
}

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every color was placed
    PaletteExhausted,
    /// The growth front closed before the palette ran out
    FrontierExhausted {
        /// Colors that were never placed
        colors_left: usize,
    },
}

impl Termination {
    /// Whether every color found a position
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::PaletteExhausted)
    }
}

/// Engine lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Colors and frontier positions remain
    Growing,
    /// Terminal; further steps are no-ops
    Done(Termination),
}

/// One committed placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Position that received the color
    pub position: Position,
    /// Color written
    pub color: Color,
    /// Cost of the chosen position
    pub score: f64,
    /// 1-based placement number
    pub step: usize,
}

/// Result of a single engine step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// A color was committed
    Placed(Placement),
    /// The engine reached a terminal state
    Done(Termination),
}

/// Counters describing the engine after a placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Colors placed so far
    pub placed: usize,
    /// Colors still waiting
    pub colors_left: usize,
    /// Current frontier size
    pub frontier_size: usize,
}

/// Final report of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the run stopped
    pub termination: Termination,
    /// Colors placed by the engine
    pub placed: usize,
    /// Colors never placed
    pub colors_left: usize,
    /// Frontier positions left unused
    pub frontier_left: usize,
}

/// Receives the canvas on placement boundaries
///
/// Callbacks run between steps with a shared borrow of the canvas, so an
/// observer never sees a half-applied placement.
pub trait GrowthObserver {
    /// Called after every committed placement
    fn on_placement(&mut self, canvas: &Canvas, placement: &Placement, progress: Progress);

    /// Called once when the run terminates
    fn on_finish(&mut self, _canvas: &Canvas, _summary: &RunSummary) {}
}

impl GrowthObserver for () {
    fn on_placement(&mut self, _canvas: &Canvas, _placement: &Placement, _progress: Progress) {}
}

impl<T: GrowthObserver> GrowthObserver for Option<T> {
    fn on_placement(&mut self, canvas: &Canvas, placement: &Placement, progress: Progress) {
        if let Some(observer) = self {
            observer.on_placement(canvas, placement, progress);
        }
    }

    fn on_finish(&mut self, canvas: &Canvas, summary: &RunSummary) {
        if let Some(observer) = self {
            observer.on_finish(canvas, summary);
        }
    }
}

impl<A: GrowthObserver, B: GrowthObserver> GrowthObserver for (A, B) {
    fn on_placement(&mut self, canvas: &Canvas, placement: &Placement, progress: Progress) {
        self.0.on_placement(canvas, placement, progress);
        self.1.on_placement(canvas, placement, progress);
    }

    fn on_finish(&mut self, canvas: &Canvas, summary: &RunSummary) {
        self.0.on_finish(canvas, summary);
        self.1.on_finish(canvas, summary);
    }
}

/// Greedy frontier-growth placement engine
///
/// Pops colors from the palette queue and commits each one at the frontier
/// position where it costs least, until the palette or the frontier is exhausted.
pub struct PlacementEngine {
    canvas: Canvas,
    frontier: FrontierSet,
    palette: PaletteQueue,
    scorer: Box<dyn PositionScorer>,
    random_selector: RandomSelector,
    config: GrowthConfig,
    placed: usize,
    state: EngineState,
}

impl PlacementEngine {
    /// Create an engine over a prepared canvas, frontier and palette
    ///
    /// Cells already filled on `canvas` act as fixed context for scoring.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The frontier does not match the canvas dimensions
    /// - The frontier or the palette is empty
    /// - A frontier position is already filled on the canvas
    pub fn new(
        canvas: Canvas,
        frontier: FrontierSet,
        palette: PaletteQueue,
        config: GrowthConfig,
    ) -> Result<Self> {
        config.validate()?;

        if frontier.dimensions() != canvas.dimensions() {
            let (fw, fh) = frontier.dimensions();
            let (cw, ch) = canvas.dimensions();
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("frontier covers {fw}x{fh} cells but the canvas is {cw}x{ch}"),
            });
        }
        if frontier.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "initial frontier is empty".to_string(),
            });
        }
        if palette.is_empty() {
            return Err(AlgorithmError::InvalidSourceData {
                reason: "palette is empty".to_string(),
            });
        }
        if let Some(position) = frontier.iter().find(|&pos| !canvas.is_empty_at(pos)) {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!("frontier position {position} is filled or outside the canvas"),
            });
        }

        let scorer: Box<dyn PositionScorer> = match config.scoring {
            ScoringStrategy::Exact => Box::new(ExactScorer::new(config.radius, config.metric)),
            ScoringStrategy::MeanCache => Box::new(MeanCacheScorer::from_canvas(
                &canvas,
                config.radius,
                config.metric,
            )),
        };

        Ok(Self {
            canvas,
            frontier,
            palette,
            scorer,
            random_selector: RandomSelector::new(config.placement_seed),
            config,
            placed: 0,
            state: EngineState::Growing,
        })
    }

    /// Current canvas
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Current frontier
    pub const fn frontier(&self) -> &FrontierSet {
        &self.frontier
    }

    /// Colors not yet placed
    pub const fn palette(&self) -> &PaletteQueue {
        &self.palette
    }

    /// Engine configuration
    pub const fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Lifecycle state
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Number of colors committed so far
    pub const fn placed(&self) -> usize {
        self.placed
    }

    /// Counters for the current state
    pub const fn progress(&self) -> Progress {
        Progress {
            placed: self.placed,
            colors_left: self.palette.len(),
            frontier_size: self.frontier.len(),
        }
    }

    /// Consume the engine and return its canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    /// Execute a single placement
    ///
    /// # Errors
    ///
    /// Returns a fatal error if frontier bookkeeping is inconsistent:
    /// - The selected position is missing from the frontier
    /// - The selected position is already filled on the canvas
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let EngineState::Done(termination) = self.state {
            return Ok(StepOutcome::Done(termination));
        }

        // Phase 1: terminal conditions
        if let Some(termination) = self.check_termination() {
            self.state = EngineState::Done(termination);
            return Ok(StepOutcome::Done(termination));
        }

        let Some(color) = self.palette.pop() else {
            return Ok(StepOutcome::Done(Termination::PaletteExhausted));
        };

        // Phase 2: rate every frontier position
        let mut rated = rate_positions(
            self.scorer.as_ref(),
            &self.canvas,
            self.frontier.as_slice(),
            color,
            self.config.parallel_scoring,
        );

        // Phase 3: randomized minimum
        let best = self
            .random_selector
            .select_minimum(&mut rated)
            .ok_or_else(|| computation_error("select_minimum", &"no rated frontier positions"))?;

        // Phase 4: commit
        if !self.frontier.remove(best.position) {
            return Err(AlgorithmError::FrontierInvariant {
                position: best.position,
                step: self.placed + 1,
            });
        }
        self.canvas.set(best.position, color)?;
        self.scorer
            .record_placement(&self.canvas, best.position, color);
        self.frontier
            .expand_from(&self.canvas, best.position, self.config.radius);
        self.placed += 1;

        Ok(StepOutcome::Placed(Placement {
            position: best.position,
            color,
            score: best.score,
            step: self.placed,
        }))
    }

    /// Step until a terminal state, notifying `observer` after every placement
    ///
    /// # Errors
    ///
    /// Propagates fatal errors from [`step`](Self::step)
    pub fn run(&mut self, observer: &mut dyn GrowthObserver) -> Result<RunSummary> {
        loop {
            match self.step()? {
                StepOutcome::Placed(placement) => {
                    observer.on_placement(&self.canvas, &placement, self.progress());
                }
                StepOutcome::Done(termination) => {
                    let summary = self.summary(termination);
                    debug!(
                        placed = summary.placed,
                        colors_left = summary.colors_left,
                        frontier_left = summary.frontier_left,
                        "growth finished"
                    );
                    observer.on_finish(&self.canvas, &summary);
                    return Ok(summary);
                }
            }
        }
    }

    /// Run without an observer
    ///
    /// # Errors
    ///
    /// Propagates fatal errors from [`step`](Self::step)
    pub fn run_to_completion(&mut self) -> Result<RunSummary> {
        self.run(&mut ())
    }

    /// Verify that every frontier position is in bounds and empty
    ///
    /// # Errors
    ///
    /// Returns `FrontierInvariant` for the first offending position
    pub fn check_invariants(&self) -> Result<()> {
        match self.frontier.iter().find(|&pos| !self.canvas.is_empty_at(pos)) {
            Some(position) => Err(AlgorithmError::FrontierInvariant {
                position,
                step: self.placed,
            }),
            None => Ok(()),
        }
    }

    fn check_termination(&self) -> Option<Termination> {
        if self.palette.is_empty() {
            Some(Termination::PaletteExhausted)
        } else if self.frontier.is_empty() {
            Some(Termination::FrontierExhausted {
                colors_left: self.palette.len(),
            })
        } else {
            None
        }
    }

    const fn summary(&self, termination: Termination) -> RunSummary {
        RunSummary {
            termination,
            placed: self.placed,
            colors_left: self.palette.len(),
            frontier_left: self.frontier.len(),
        }
    }
}
