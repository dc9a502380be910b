//! Algorithm constants and runtime configuration defaults

// Canvas
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 1920;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 1080;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 16_384;

// Growth
/// Neighborhood radius for scoring and frontier growth (1 = Moore neighborhood)
pub const DEFAULT_NEIGHBORHOOD_RADIUS: usize = 1;
/// Largest accepted neighborhood radius
pub const MAX_NEIGHBORHOOD_RADIUS: usize = 16;
/// Frontier size from which candidate scoring is split across threads
pub const PARALLEL_SCORING_THRESHOLD: usize = 1024;

// Seeding
/// Arm length of the plus shape drawn around each layout anchor
pub const DEFAULT_ARM_LENGTH: usize = 5;
/// Luma above which a mask pixel seeds the frontier
pub const DEFAULT_MASK_THRESHOLD: u8 = 127;

// Palette lattice
/// Default lattice levels on the blue channel
pub const DEFAULT_BLUE_LEVELS: u16 = 64;
/// Default lattice levels on the green channel
pub const DEFAULT_GREEN_LEVELS: u16 = 128;
/// Default lattice levels on the red channel
pub const DEFAULT_RED_LEVELS: u16 = 128;
/// Fewest levels a channel may have
pub const MIN_QUANTIZATION_LEVELS: u16 = 2;
/// Most levels a channel may have
pub const MAX_QUANTIZATION_LEVELS: u16 = 256;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 0;

// Output settings
/// Placements between two snapshots
pub const DEFAULT_SNAPSHOT_INTERVAL: usize = 512;
/// Directory receiving snapshots
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// File name prefix of numbered snapshots
pub const SNAPSHOT_PREFIX: &str = "image";
/// Zero padding of snapshot numbers
pub const SNAPSHOT_NUMBER_WIDTH: usize = 4;
/// Default path of the final image
pub const DEFAULT_OUTPUT_FILE: &str = "allcolors.png";
/// Weight of the smoothed preview in embellished snapshots
pub const DEFAULT_EMBELLISH_OPACITY: f64 = 0.5;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
