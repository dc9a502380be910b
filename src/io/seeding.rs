//! Initial frontier construction from named layouts or a mask image

use crate::algorithm::frontier::FrontierSet;
use crate::color::Color;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::canvas::{Canvas, Position};
use bitvec::prelude::*;
use image::GrayImage;
use std::path::{Path, PathBuf};

/// Symmetric arrangements of seed anchors, as fractions of the canvas size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SeedLayout {
    /// Single anchor at the center
    #[default]
    #[value(name = "1")]
    One,
    /// Two anchors side by side
    #[value(name = "2")]
    Two,
    /// Three anchors in a triangle
    #[value(name = "3")]
    Three,
    /// Four anchors in a rectangle
    #[value(name = "4")]
    Four,
}

impl SeedLayout {
    /// Anchor coordinates as `(x, y)` fractions of width and height
    pub const fn fractions(self) -> &'static [(f64, f64)] {
        match self {
            Self::One => &[(0.5, 0.5)],
            Self::Two => &[(0.33, 0.5), (0.67, 0.5)],
            Self::Three => &[(0.33, 0.40), (0.50, 0.69), (0.67, 0.40)],
            Self::Four => &[(0.33, 0.36), (0.67, 0.36), (0.33, 0.64), (0.67, 0.64)],
        }
    }

    /// Anchor positions on a `width × height` canvas
    pub fn anchors(self, width: usize, height: usize) -> Vec<Position> {
        self.fractions()
            .iter()
            .map(|&(fx, fy)| {
                Position::new(
                    ((fx * width as f64) as usize).min(width.saturating_sub(1)),
                    ((fy * height as f64) as usize).min(height.saturating_sub(1)),
                )
            })
            .collect()
    }

    /// Plus-shaped seed positions around every anchor, clipped to the canvas
    pub fn seed_positions(self, width: usize, height: usize, arm_length: usize) -> Vec<Position> {
        self.anchors(width, height)
            .into_iter()
            .flat_map(|anchor| cross_positions(anchor, arm_length, width, height))
            .collect()
    }
}

/// Horizontal and vertical arms of `arm_length` cells through `center`
///
/// The center appears in both arms; callers deduplicate through set insertion.
pub fn cross_positions(
    center: Position,
    arm_length: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Position> {
    let x_start = center.x.saturating_sub(arm_length);
    let x_end = center.x.saturating_add(arm_length).min(width.saturating_sub(1));
    let y_start = center.y.saturating_sub(arm_length);
    let y_end = center.y.saturating_add(arm_length).min(height.saturating_sub(1));

    let horizontal = (x_start..=x_end).map(move |x| Position::new(x, center.y));
    let vertical = (y_start..=y_end).map(move |y| Position::new(center.x, y));
    horizontal.chain(vertical)
}

/// Monochrome seed mask
///
/// Bright pixels mark initial frontier positions; the mask's size becomes the
/// canvas size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedMask {
    width: usize,
    height: usize,
    bits: BitVec,
}

impl SeedMask {
    /// Threshold a grayscale image: luma strictly above `threshold` seeds
    pub fn from_luma(image: &GrayImage, threshold: u8) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let mut bits = bitvec![0; width * height];
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel.0[0] > threshold {
                bits.set(y as usize * width + x as usize, true);
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Load and threshold a mask image
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if the file cannot be opened or decoded
    pub fn from_path(path: &Path, threshold: u8) -> Result<Self> {
        let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_luma(&img.to_luma8(), threshold))
    }

    /// Mask dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of seeding pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Seeding positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width.max(1);
        self.bits
            .iter_ones()
            .map(move |index| Position::new(index % width, index / width))
    }
}

/// Where the initial frontier comes from
#[derive(Clone, Debug, PartialEq)]
pub enum SeedSource {
    /// Named layout on a canvas of the given size
    Layout {
        /// Anchor arrangement
        layout: SeedLayout,
        /// Arm length of the plus shape around each anchor
        arm_length: usize,
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },
    /// Mask image defining both canvas size and seeds
    Mask {
        /// Path to the mask image
        path: PathBuf,
        /// Luma threshold
        threshold: u8,
    },
}

/// Build an empty canvas and its initial frontier
///
/// # Errors
///
/// Returns an error if:
/// - The canvas would have zero area
/// - The mask image cannot be loaded
/// - No seed position lands on the canvas
pub fn prepare(source: &SeedSource, sentinel: Color) -> Result<(Canvas, FrontierSet)> {
    let (canvas, seeds) = match source {
        SeedSource::Layout {
            layout,
            arm_length,
            width,
            height,
        } => {
            let canvas = Canvas::new(*width, *height, sentinel)?;
            let seeds = layout.seed_positions(*width, *height, *arm_length);
            (canvas, seeds)
        }
        SeedSource::Mask { path, threshold } => {
            let mask = SeedMask::from_path(path, *threshold)?;
            let (width, height) = mask.dimensions();
            let canvas = Canvas::new(width, height, sentinel)?;
            (canvas, mask.positions().collect())
        }
    };

    let mut frontier = FrontierSet::for_canvas(&canvas);
    if frontier.seed(&canvas, seeds) == 0 {
        return Err(AlgorithmError::InvalidSourceData {
            reason: "seed set is empty".to_string(),
        });
    }
    Ok((canvas, frontier))
}
