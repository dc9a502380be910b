//! CLI entry point for the all-colors image generator

use allcolors::io::cli::{Cli, Runner};
use clap::Parser;
use tracing::Level;

fn main() -> allcolors::Result<()> {
    let cli = Cli::parse();
    let level = if cli.quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    Runner::new(cli).run().map(|_| ())
}
