//! Tests for command-line parsing and the end-to-end runner

#[cfg(test)]
mod tests {
    use allcolors::algorithm::executor::Termination;
    use allcolors::algorithm::scoring::ScoringStrategy;
    use allcolors::color::ColorMetric;
    use allcolors::color::palette::{SortDirection, SortKey};
    use allcolors::io::cli::{Cli, Runner};
    use allcolors::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SNAPSHOT_INTERVAL, DEFAULT_WIDTH};
    use allcolors::io::image::OutputFormat;
    use allcolors::io::seeding::{SeedLayout, SeedSource};
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("allcolors").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    // Tests defaults describe the standard 1920x1080 single-seed run
    // Verified by changing a default constant
    #[test]
    fn test_defaults() {
        let cli = parse(&[]);

        assert_eq!(
            cli.seed_source(),
            SeedSource::Layout {
                layout: SeedLayout::One,
                arm_length: 5,
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
            }
        );
        let palette = cli.palette_config();
        assert_eq!(palette.quantization.color_count(), 63 * 127 * 127);
        assert_eq!(palette.sort_key, SortKey::Hue);
        assert_eq!(palette.direction, SortDirection::Ascending);

        let growth = cli.growth_config();
        assert_eq!(growth.radius, 1);
        assert_eq!(growth.metric, ColorMetric::Euclidean);
        assert_eq!(growth.scoring, ScoringStrategy::Exact);

        let snapshots = cli.snapshot_config().expect("snapshots enabled");
        assert_eq!(snapshots.interval, DEFAULT_SNAPSHOT_INTERVAL);
        assert!(snapshots.embellish);
        assert!(cli.should_show_progress());
    }

    // Tests the placement seed follows the palette seed unless overridden
    // Verified by defaulting the placement seed to zero
    #[test]
    fn test_placement_seed_fallback() {
        assert_eq!(parse(&["-s", "42"]).growth_config().placement_seed, 42);
        assert_eq!(
            parse(&["-s", "42", "--placement-seed", "7"])
                .growth_config()
                .placement_seed,
            7
        );
    }

    // Tests value enums parse their kebab-case names
    // Verified by renaming a variant
    #[test]
    fn test_value_enums() {
        let cli = parse(&[
            "--layout",
            "3",
            "--metric",
            "chebyshev",
            "--scorer",
            "mean-cache",
            "--sort-key",
            "saturation",
            "--format",
            "ppm",
            "-d",
        ]);

        assert!(matches!(
            cli.seed_source(),
            SeedSource::Layout {
                layout: SeedLayout::Three,
                ..
            }
        ));
        assert_eq!(cli.growth_config().metric, ColorMetric::Chebyshev);
        assert_eq!(cli.growth_config().scoring, ScoringStrategy::MeanCache);
        assert_eq!(cli.palette_config().sort_key, SortKey::Saturation);
        assert_eq!(cli.palette_config().direction, SortDirection::Descending);
        assert_eq!(cli.format, OutputFormat::Ppm);
    }

    // Tests a mask path replaces the layout seeding
    // Verified by preferring the layout when both are given
    #[test]
    fn test_mask_source() {
        let cli = parse(&["--mask", "seeds.png", "-t", "10", "-l", "2"]);

        assert_eq!(
            cli.seed_source(),
            SeedSource::Mask {
                path: PathBuf::from("seeds.png"),
                threshold: 10,
            }
        );
    }

    // Tests snapshots and progress can be switched off
    // Verified by ignoring the flags
    #[test]
    fn test_disable_flags() {
        let cli = parse(&["--no-snapshots", "-q"]);

        assert!(cli.snapshot_config().is_none());
        assert!(!cli.should_show_progress());
    }

    // Tests an unknown layout is a parse error
    // Verified by accepting arbitrary layout names
    #[test]
    fn test_invalid_layout() {
        assert!(Cli::try_parse_from(["allcolors", "--layout", "5"]).is_err());
    }

    // Tests a small run places every color and writes the image and snapshots
    // Verified by exporting before the run finishes
    #[test]
    fn test_runner_end_to_end() {
        let dir = TempDir::new().expect("temp dir");
        let output = dir.path().join("final.png");
        let frames = dir.path().join("frames");
        let cli = parse(&[
            "-w",
            "8",
            "-H",
            "8",
            "--arm-length",
            "1",
            "--levels-blue",
            "5",
            "--levels-green",
            "5",
            "--levels-red",
            "5",
            "--snapshot-every",
            "16",
            "--output-dir",
            frames.to_str().expect("utf-8 path"),
            "-o",
            output.to_str().expect("utf-8 path"),
            "-q",
        ]);

        let report = Runner::new(cli).run().expect("run succeeds");

        assert_eq!(report.summary.termination, Termination::PaletteExhausted);
        assert_eq!(report.summary.placed, 64);
        assert_eq!(report.snapshots_written, 4);
        assert_eq!(report.snapshots_failed, 0);
        assert_eq!(report.output, output);

        let img = image::open(&output).expect("readable output").to_rgb8();
        assert_eq!(img.dimensions(), (8, 8));
        assert!(img.pixels().all(|p| p.0 != [0, 0, 0]));
    }

    // Tests surplus colors end the run with a frontier-exhausted summary
    // Verified by reporting completion whenever the canvas is full
    #[test]
    fn test_runner_surplus_palette() {
        let dir = TempDir::new().expect("temp dir");
        let output = dir.path().join("final.ppm");
        let cli = parse(&[
            "-w",
            "4",
            "-H",
            "4",
            "--levels-blue",
            "3",
            "--levels-green",
            "4",
            "--levels-red",
            "4",
            "--no-snapshots",
            "-o",
            output.to_str().expect("utf-8 path"),
            "-q",
        ]);

        let report = Runner::new(cli).run().expect("run succeeds");

        assert_eq!(
            report.summary.termination,
            Termination::FrontierExhausted { colors_left: 2 }
        );
        assert_eq!(report.summary.placed, 16);
        assert!(output.exists());
    }
}
