//! Byte colors stored in blue, green, red order

use std::fmt;

/// Three-channel 8-bit color in BGR channel order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
}

impl Color {
    /// All-zero color, the default marker for unfilled canvas cells
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Mid-gray used where a preview blend would otherwise read as unfilled
    pub const MID_GRAY: Self = Self::new(127, 127, 127);

    /// Create a color from blue, green and red channels
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Channels in RGB order, as expected by image encoders
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels in storage order
    pub const fn channels(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Build a color from channels in storage order
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Scale every channel by `factor`, truncating toward zero
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor).clamp(0.0, 255.0) as u8;
        Self::new(scale(self.b), scale(self.g), scale(self.r))
    }

    /// Channel-wise saturating sum
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self::new(
            self.b.saturating_add(other.b),
            self.g.saturating_add(other.g),
            self.r.saturating_add(other.r),
        )
    }

    /// Signed per-channel differences `other - self`
    fn deltas(self, other: Self) -> [f64; 3] {
        [
            f64::from(other.b) - f64::from(self.b),
            f64::from(other.g) - f64::from(self.g),
            f64::from(other.r) - f64::from(self.r),
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Distance between two colors in channel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMetric {
    /// `sqrt(db² + dg² + dr²)`
    #[default]
    Euclidean,
    /// `|db| + |dg| + |dr|`
    Manhattan,
    /// `max(|db|, |dg|, |dr|)`
    Chebyshev,
}

impl ColorMetric {
    /// Distance between `a` and `b`, always non-negative
    pub fn distance(self, a: Color, b: Color) -> f64 {
        self.combine(a.deltas(b))
    }

    /// Distance from `color` to a mean color given as floating point channels
    pub fn distance_to_mean(self, color: Color, mean: [f64; 3]) -> f64 {
        let [b, g, r] = color.channels();
        self.combine([
            mean[0] - f64::from(b),
            mean[1] - f64::from(g),
            mean[2] - f64::from(r),
        ])
    }

    fn combine(self, [db, dg, dr]: [f64; 3]) -> f64 {
        match self {
            Self::Euclidean => dr.mul_add(dr, db.mul_add(db, dg * dg)).sqrt(),
            Self::Manhattan => db.abs() + dg.abs() + dr.abs(),
            Self::Chebyshev => db.abs().max(dg.abs()).max(dr.abs()),
        }
    }
}
