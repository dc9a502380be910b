//! Hue, saturation and value approximation for byte colors

use crate::color::bgr::Color;

/// Color in HSV space
///
/// Hue is in degrees within `[0, 360)`, saturation and value are in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value (brightness)
    pub v: f64,
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        bgr_to_hsv(color)
    }
}

/// Convert a BGR color to HSV
///
/// Achromatic colors (all channels equal, black included) are reported as
/// all-zero HSV, so every gray shares the lowest sort key on each attribute.
pub fn bgr_to_hsv(color: Color) -> Hsv {
    let b = f64::from(color.b) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let r = f64::from(color.r) / 255.0;

    let max_channel = color.r.max(color.g).max(color.b);
    let min_channel = color.r.min(color.g).min(color.b);
    let v = f64::from(max_channel) / 255.0;
    let chroma = v - f64::from(min_channel) / 255.0;

    if max_channel == min_channel {
        return Hsv {
            h: 0.0,
            s: 0.0,
            v: 0.0,
        };
    }

    let s = chroma / v;
    let mut h = if max_channel == color.r {
        60.0 * (g - b) / chroma
    } else if max_channel == color.g {
        60.0f64.mul_add((b - r) / chroma, 120.0)
    } else {
        60.0f64.mul_add((r - g) / chroma, 240.0)
    };
    if h < 0.0 {
        h += 360.0;
    }

    Hsv { h, s, v }
}
