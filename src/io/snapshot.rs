//! Periodic preview snapshots of a running placement
//!
//! Snapshots are written from the observer callbacks of the engine, so they
//! always capture the canvas on a placement boundary. A failed write is
//! logged and counted but never stops the run.

use crate::algorithm::executor::{GrowthObserver, Placement, Progress, RunSummary};
use crate::io::configuration::{
    DEFAULT_EMBELLISH_OPACITY, DEFAULT_OUTPUT_DIR, DEFAULT_SNAPSHOT_INTERVAL, SNAPSHOT_NUMBER_WIDTH,
    SNAPSHOT_PREFIX,
};
use crate::io::embellish::embellish;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{OutputFormat, export_pixels};
use crate::spatial::canvas::Canvas;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Snapshot cadence, location and appearance
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotConfig {
    /// Placements between two snapshots
    pub interval: usize,
    /// Directory receiving numbered images
    pub directory: PathBuf,
    /// Encoded format
    pub format: OutputFormat,
    /// Blend a smoothed preview into empty regions
    pub embellish: bool,
    /// Weight of the smoothed preview, in `[0, 1]`
    pub opacity: f64,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SNAPSHOT_INTERVAL,
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            embellish: true,
            opacity: DEFAULT_EMBELLISH_OPACITY,
        }
    }
}

impl SnapshotConfig {
    /// Check the interval and opacity
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the interval is zero or the opacity is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            return Err(invalid_parameter(
                "snapshot_interval",
                &self.interval,
                &"must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(invalid_parameter(
                "opacity",
                &self.opacity,
                &"must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Writes numbered snapshot images while the engine runs
pub struct SnapshotWriter {
    config: SnapshotConfig,
    written: usize,
    failed: usize,
    last_snapshot_step: usize,
}

impl SnapshotWriter {
    /// Create a writer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: SnapshotConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            written: 0,
            failed: 0,
            last_snapshot_step: 0,
        })
    }

    /// Path of the snapshot with the given 1-based number
    pub fn snapshot_path(&self, number: usize) -> PathBuf {
        self.config.directory.join(format!(
            "{SNAPSHOT_PREFIX}{number:0width$}.{}",
            self.config.format.extension(),
            width = SNAPSHOT_NUMBER_WIDTH
        ))
    }

    /// Render and write the next snapshot of `canvas`
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be written
    pub fn write_snapshot(&mut self, canvas: &Canvas) -> Result<PathBuf> {
        let path = self.snapshot_path(self.written + self.failed + 1);
        let frame = if self.config.embellish {
            embellish(canvas, self.config.opacity)
        } else {
            canvas.as_array().clone()
        };

        match export_pixels(&frame, &path, self.config.format) {
            Ok(()) => {
                self.written += 1;
                Ok(path)
            }
            Err(e) => {
                self.failed += 1;
                Err(e)
            }
        }
    }

    /// Snapshots written successfully
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Snapshots that failed to write
    pub const fn failed(&self) -> usize {
        self.failed
    }

    fn write_logged(&mut self, canvas: &Canvas, step: usize) {
        self.last_snapshot_step = step;
        match self.write_snapshot(canvas) {
            Ok(path) => debug!(path = %path.display(), step, "snapshot written"),
            Err(e) => warn!(error = %e, step, "snapshot failed, continuing"),
        }
    }
}

impl GrowthObserver for SnapshotWriter {
    fn on_placement(&mut self, canvas: &Canvas, placement: &Placement, _progress: Progress) {
        if placement.step % self.config.interval == 0 {
            self.write_logged(canvas, placement.step);
        }
    }

    fn on_finish(&mut self, canvas: &Canvas, summary: &RunSummary) {
        if summary.placed > self.last_snapshot_step {
            self.write_logged(canvas, summary.placed);
        }
    }
}
