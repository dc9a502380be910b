//! Command-line interface for generating a single all-colors image

use crate::algorithm::executor::{GrowthConfig, PlacementEngine, RunSummary, Termination};
use crate::algorithm::scoring::ScoringStrategy;
use crate::color::palette::{PaletteConfig, PaletteQueue, Quantization, SortDirection, SortKey};
use crate::color::{Color, ColorMetric};
use crate::io::configuration::{
    DEFAULT_ARM_LENGTH, DEFAULT_BLUE_LEVELS, DEFAULT_EMBELLISH_OPACITY, DEFAULT_GREEN_LEVELS,
    DEFAULT_HEIGHT, DEFAULT_MASK_THRESHOLD, DEFAULT_NEIGHBORHOOD_RADIUS, DEFAULT_OUTPUT_DIR,
    DEFAULT_OUTPUT_FILE, DEFAULT_RED_LEVELS, DEFAULT_SEED, DEFAULT_SNAPSHOT_INTERVAL,
    DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::{OutputFormat, export_canvas};
use crate::io::progress::ProgressReporter;
use crate::io::seeding::{SeedLayout, SeedSource, prepare};
use crate::io::snapshot::{SnapshotConfig, SnapshotWriter};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "allcolors")]
#[command(
    author,
    version,
    about = "Grow an image that uses every color of a quantized palette exactly once"
)]
/// Command-line arguments for the image generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Canvas width in pixels (ignored with --mask)
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Canvas height in pixels (ignored with --mask)
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of symmetric seed anchors
    #[arg(short, long, value_enum, default_value_t = SeedLayout::One)]
    pub layout: SeedLayout,

    /// Mask image whose bright pixels seed the growth; sets the canvas size
    #[arg(short, long, value_name = "PATH")]
    pub mask: Option<PathBuf>,

    /// Luma above which a mask pixel becomes a seed
    #[arg(short, long, default_value_t = DEFAULT_MASK_THRESHOLD)]
    pub threshold: u8,

    /// Arm length of the plus shape around each layout anchor
    #[arg(long, default_value_t = DEFAULT_ARM_LENGTH)]
    pub arm_length: usize,

    /// Neighborhood radius for scoring and frontier growth
    #[arg(short, long, default_value_t = DEFAULT_NEIGHBORHOOD_RADIUS)]
    pub radius: usize,

    /// Lattice levels on the blue channel
    #[arg(long, default_value_t = DEFAULT_BLUE_LEVELS)]
    pub levels_blue: u16,

    /// Lattice levels on the green channel
    #[arg(long, default_value_t = DEFAULT_GREEN_LEVELS)]
    pub levels_green: u16,

    /// Lattice levels on the red channel
    #[arg(long, default_value_t = DEFAULT_RED_LEVELS)]
    pub levels_red: u16,

    /// Random seed for the palette shuffle
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Random seed for placement tie-breaking (defaults to --seed)
    #[arg(long)]
    pub placement_seed: Option<u64>,

    /// Attribute the palette is sorted by
    #[arg(long, value_enum, default_value_t = SortKey::Hue)]
    pub sort_key: SortKey,

    /// Sort the palette in descending order
    #[arg(short, long)]
    pub descending: bool,

    /// Color distance used for scoring
    #[arg(long, value_enum, default_value_t = ColorMetric::Euclidean)]
    pub metric: ColorMetric,

    /// Scorer implementation
    #[arg(long, value_enum, default_value_t = ScoringStrategy::Exact)]
    pub scorer: ScoringStrategy,

    /// Score frontier candidates on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Placements between snapshots and progress reports
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_INTERVAL)]
    pub snapshot_every: usize,

    /// Do not write snapshots
    #[arg(long)]
    pub no_snapshots: bool,

    /// Directory receiving snapshots
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Snapshot file format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Write snapshots without the smoothed preview of empty regions
    #[arg(long)]
    pub no_embellish: bool,

    /// Weight of the smoothed preview in snapshots
    #[arg(long, default_value_t = DEFAULT_EMBELLISH_OPACITY)]
    pub opacity: f64,

    /// Final image path; a .ppm extension selects PPM
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Where the initial frontier comes from
    pub fn seed_source(&self) -> SeedSource {
        self.mask.as_ref().map_or(
            SeedSource::Layout {
                layout: self.layout,
                arm_length: self.arm_length,
                width: self.width,
                height: self.height,
            },
            |path| SeedSource::Mask {
                path: path.clone(),
                threshold: self.threshold,
            },
        )
    }

    /// Palette generation parameters
    pub const fn palette_config(&self) -> PaletteConfig {
        PaletteConfig {
            quantization: Quantization {
                blue: self.levels_blue,
                green: self.levels_green,
                red: self.levels_red,
            },
            sort_key: self.sort_key,
            direction: if self.descending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
            seed: self.seed,
        }
    }

    /// Engine parameters
    pub fn growth_config(&self) -> GrowthConfig {
        GrowthConfig {
            radius: self.radius,
            metric: self.metric,
            scoring: self.scorer,
            placement_seed: self.placement_seed.unwrap_or(self.seed),
            parallel_scoring: self.parallel,
        }
    }

    /// Snapshot parameters, or `None` when snapshots are disabled
    pub fn snapshot_config(&self) -> Option<SnapshotConfig> {
        (!self.no_snapshots).then(|| SnapshotConfig {
            interval: self.snapshot_every,
            directory: self.output_dir.clone(),
            format: self.format,
            embellish: !self.no_embellish,
            opacity: self.opacity,
        })
    }
}

/// Outcome of a command-line run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Engine summary
    pub summary: RunSummary,
    /// Snapshots written successfully
    pub snapshots_written: usize,
    /// Snapshots that failed to write
    pub snapshots_failed: usize,
    /// Path of the final image
    pub output: PathBuf,
}

/// Orchestrates seeding, palette generation, growth and export
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the whole pipeline
    ///
    /// Configuration problems are reported before any placement happens.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any configuration value is invalid or no seed lands on the canvas
    /// - A fatal engine invariant is violated
    /// - The final image cannot be written
    pub fn run(&self) -> Result<RunReport> {
        let start_time = Instant::now();
        let sentinel = Color::BLACK;

        let snapshot_writer = self
            .cli
            .snapshot_config()
            .map(SnapshotWriter::new)
            .transpose()?;

        let (canvas, frontier) = prepare(&self.cli.seed_source(), sentinel)?;
        let palette = PaletteQueue::generate(&self.cli.palette_config(), sentinel)?;

        info!(
            width = canvas.width(),
            height = canvas.height(),
            colors = palette.len(),
            seeds = frontier.len(),
            "starting growth"
        );
        if palette.len() > canvas.area() {
            warn!(
                colors = palette.len(),
                cells = canvas.area(),
                "palette is larger than the canvas; surplus colors will stay unplaced"
            );
        }

        let total = palette.len().min(canvas.area());
        let reporter = ProgressReporter::new(
            total,
            self.cli.snapshot_every,
            self.cli.should_show_progress(),
        );
        let mut engine = PlacementEngine::new(canvas, frontier, palette, self.cli.growth_config())?;

        let mut observers = (snapshot_writer, reporter);
        let summary = engine.run(&mut observers)?;
        let (snapshot_writer, _) = observers;

        export_canvas(engine.canvas(), &self.cli.output)?;

        match summary.termination {
            Termination::PaletteExhausted => info!(
                placed = summary.placed,
                elapsed_ms = start_time.elapsed().as_millis(),
                output = %self.cli.output.display(),
                "all colors placed"
            ),
            Termination::FrontierExhausted { colors_left } => warn!(
                placed = summary.placed,
                colors_left,
                elapsed_ms = start_time.elapsed().as_millis(),
                output = %self.cli.output.display(),
                "frontier exhausted before the palette"
            ),
        }

        Ok(RunReport {
            summary,
            snapshots_written: snapshot_writer.as_ref().map_or(0, SnapshotWriter::written),
            snapshots_failed: snapshot_writer.as_ref().map_or(0, SnapshotWriter::failed),
            output: self.cli.output.clone(),
        })
    }
}
