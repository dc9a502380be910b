//! Progress display and periodic progress logging for a placement run

use crate::algorithm::executor::{GrowthObserver, Placement, Progress, RunSummary};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::spatial::canvas::Canvas;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use tracing::info;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports `(colors left, frontier size)` every `interval` placements
///
/// Reports go to `tracing` and, when enabled, to a terminal progress bar.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    interval: usize,
    reports: usize,
}

impl ProgressReporter {
    /// Create a reporter for a run placing up to `total` colors
    pub fn new(total: usize, interval: usize, show_bar: bool) -> Self {
        let bar = show_bar.then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        });
        Self {
            bar,
            interval: interval.max(1),
            reports: 0,
        }
    }

    /// Number of interval reports emitted so far
    pub const fn reports(&self) -> usize {
        self.reports
    }

    fn report(&mut self, progress: Progress) {
        self.reports += 1;
        info!(
            placed = progress.placed,
            colors_left = progress.colors_left,
            frontier_size = progress.frontier_size,
            "progress"
        );
        if let Some(ref bar) = self.bar {
            bar.set_position(progress.placed as u64);
            bar.set_message(format!("frontier {}", progress.frontier_size));
        }
    }
}

impl GrowthObserver for ProgressReporter {
    fn on_placement(&mut self, _canvas: &Canvas, placement: &Placement, progress: Progress) {
        if placement.step % self.interval == 0 {
            self.report(progress);
        }
    }

    fn on_finish(&mut self, _canvas: &Canvas, summary: &RunSummary) {
        if let Some(ref bar) = self.bar {
            bar.set_position(summary.placed as u64);
            bar.finish_with_message(format!("{} colors left", summary.colors_left));
        }
    }
}
