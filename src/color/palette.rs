//! Quantized palette enumeration and the stack of colors awaiting placement

use crate::color::bgr::Color;
use crate::color::hsv::bgr_to_hsv;
use crate::io::configuration::{
    DEFAULT_BLUE_LEVELS, DEFAULT_GREEN_LEVELS, DEFAULT_RED_LEVELS, DEFAULT_SEED,
    MAX_QUANTIZATION_LEVELS, MIN_QUANTIZATION_LEVELS,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

/// Number of lattice levels per channel
///
/// A channel with `n` levels takes the values `i * 256 / n` for `i` in `1..n`.
/// Index 0 is skipped so that no channel is ever zero and the all-zero
/// sentinel can never be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quantization {
    /// Levels on the blue channel
    pub blue: u16,
    /// Levels on the green channel
    pub green: u16,
    /// Levels on the red channel
    pub red: u16,
}

impl Default for Quantization {
    fn default() -> Self {
        Self {
            blue: DEFAULT_BLUE_LEVELS,
            green: DEFAULT_GREEN_LEVELS,
            red: DEFAULT_RED_LEVELS,
        }
    }
}

impl Quantization {
    /// Same level count on every channel
    pub const fn uniform(levels: u16) -> Self {
        Self {
            blue: levels,
            green: levels,
            red: levels,
        }
    }

    /// Check every channel is within the supported level range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a channel has fewer than 2 or more than 256 levels
    pub fn validate(&self) -> Result<()> {
        for (parameter, levels) in [
            ("blue_levels", self.blue),
            ("green_levels", self.green),
            ("red_levels", self.red),
        ] {
            if !(MIN_QUANTIZATION_LEVELS..=MAX_QUANTIZATION_LEVELS).contains(&levels) {
                return Err(invalid_parameter(
                    parameter,
                    &levels,
                    &format!(
                        "must be between {MIN_QUANTIZATION_LEVELS} and {MAX_QUANTIZATION_LEVELS}"
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Number of lattice colors, before the sentinel is excluded
    pub fn color_count(&self) -> usize {
        [self.blue, self.green, self.red]
            .iter()
            .map(|&levels| usize::from(levels.saturating_sub(1)))
            .product()
    }
}

/// Values taken by one channel of the lattice
fn channel_values(levels: u16) -> impl Iterator<Item = u8> + Clone {
    let levels = u32::from(levels);
    (1..levels).map(move |i| (i * 256 / levels) as u8)
}

/// Attribute the palette is ordered by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Hue angle
    #[default]
    Hue,
    /// HSV saturation
    Saturation,
    /// HSV value
    Value,
}

/// Ordering direction of the sorted palette
///
/// The queue is consumed from its end, so an ascending sort places the
/// largest keys first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortDirection {
    /// Smallest key at the front
    #[default]
    Ascending,
    /// Largest key at the front
    Descending,
}

/// Parameters for palette generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Channel lattice density
    pub quantization: Quantization,
    /// Sort attribute applied after shuffling
    pub sort_key: SortKey,
    /// Sort direction
    pub direction: SortDirection,
    /// Seed for the pre-sort shuffle
    pub seed: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            quantization: Quantization::default(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Enumerate, shuffle and sort the palette
///
/// The shuffle randomizes the relative order of colors sharing a sort key;
/// the sort itself is stable.
///
/// # Errors
///
/// Returns an error if the quantization is invalid
pub fn generate_palette(config: &PaletteConfig, sentinel: Color) -> Result<Vec<Color>> {
    config.quantization.validate()?;
    let q = config.quantization;

    let mut colors = Vec::with_capacity(q.color_count());
    for b in channel_values(q.blue) {
        for g in channel_values(q.green) {
            for r in channel_values(q.red) {
                let color = Color::new(b, g, r);
                if color != sentinel {
                    colors.push(color);
                }
            }
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    colors.shuffle(&mut rng);

    let mut keyed: Vec<(f64, Color)> = colors
        .into_iter()
        .map(|color| (sort_value(color, config.sort_key), color))
        .collect();
    match config.direction {
        SortDirection::Ascending => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
        SortDirection::Descending => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
    }

    Ok(keyed.into_iter().map(|(_, color)| color).collect())
}

fn sort_value(color: Color, key: SortKey) -> f64 {
    let hsv = bgr_to_hsv(color);
    match key {
        SortKey::Hue => hsv.h,
        SortKey::Saturation => hsv.s,
        SortKey::Value => hsv.v,
    }
}

/// Colors awaiting placement, consumed from the end
#[derive(Clone, Debug)]
pub struct PaletteQueue {
    colors: Vec<Color>,
}

impl PaletteQueue {
    /// Wrap an ordered color sequence
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if a color repeats or equals the sentinel
    pub fn new(colors: Vec<Color>, sentinel: Color) -> Result<Self> {
        let mut seen = HashSet::with_capacity(colors.len());
        for &color in &colors {
            if color == sentinel {
                return Err(AlgorithmError::InvalidSourceData {
                    reason: format!("palette contains the sentinel color {color}"),
                });
            }
            if !seen.insert(color) {
                return Err(AlgorithmError::InvalidSourceData {
                    reason: format!("palette contains {color} more than once"),
                });
            }
        }
        Ok(Self { colors })
    }

    /// Generate a palette and wrap it as a queue
    ///
    /// # Errors
    ///
    /// Returns an error if the quantization is invalid
    pub fn generate(config: &PaletteConfig, sentinel: Color) -> Result<Self> {
        Ok(Self {
            colors: generate_palette(config, sentinel)?,
        })
    }

    /// Remove and return the next color
    pub fn pop(&mut self) -> Option<Color> {
        self.colors.pop()
    }

    /// Next color without consuming it
    pub fn peek(&self) -> Option<Color> {
        self.colors.last().copied()
    }

    /// Colors still waiting
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether every color has been consumed
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Remaining colors in storage order (the last one is consumed next)
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}
