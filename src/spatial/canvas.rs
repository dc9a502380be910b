//! Fixed-size pixel grid holding placed colors or the unfilled sentinel
//!
//! Cells are addressed by [`Position`] and stored row-major in an
//! `Array2` indexed as `[y, x]`. A cell that holds a non-sentinel color is
//! never written again.

use crate::color::Color;
use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use ndarray::Array2;
use std::fmt;

/// Canvas coordinate, `x` across and `y` down
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Position {
    /// Create a position
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid of colors with a reserved sentinel marking empty cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<Color>,
    sentinel: Color,
}

impl Canvas {
    /// Create a canvas with every cell set to `sentinel`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or exceeds
    /// `MAX_CANVAS_DIMENSION`
    pub fn new(width: usize, height: usize, sentinel: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &"canvas must have a non-zero area",
            ));
        }
        if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &format!("dimensions are limited to {MAX_CANVAS_DIMENSION}"),
            ));
        }
        Ok(Self {
            pixels: Array2::from_elem((height, width), sentinel),
            sentinel,
        })
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    /// Color reserved for unfilled cells
    pub const fn sentinel(&self) -> Color {
        self.sentinel
    }

    /// Whether `pos` lies inside the canvas
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    /// Color at `pos`, or `None` outside the canvas
    pub fn get(&self, pos: Position) -> Option<Color> {
        self.pixels.get([pos.y, pos.x]).copied()
    }

    /// Whether `pos` is inside the canvas and still holds the sentinel
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(self.sentinel)
    }

    /// Write `color` into an empty cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `pos` lies outside the canvas, or
    /// `CanvasOverwrite` if the cell already holds a color
    pub fn set(&mut self, pos: Position, color: Color) -> Result<()> {
        let dimensions = self.dimensions();
        let sentinel = self.sentinel;
        let cell = self
            .pixels
            .get_mut([pos.y, pos.x])
            .ok_or(AlgorithmError::OutOfBounds {
                position: pos,
                dimensions,
            })?;
        if *cell != sentinel {
            return Err(AlgorithmError::CanvasOverwrite {
                position: pos,
                existing: *cell,
            });
        }
        *cell = color;
        Ok(())
    }

    /// Number of cells holding a color
    pub fn filled_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != self.sentinel).count()
    }

    /// Row-major iterator over `(position, color)` pairs
    pub fn pixels(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), &color)| (Position::new(x, y), color))
    }

    /// Underlying `[y, x]` array
    pub const fn as_array(&self) -> &Array2<Color> {
        &self.pixels
    }
}
