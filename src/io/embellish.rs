//! Cosmetic smoothing of still-empty regions for preview snapshots
//!
//! The preview dilates every channel over a 3x3 window, median-blurs the
//! result over the same window and blends it into the empty cells. It works on
//! a copy; the canvas driving placement is never touched.

use crate::color::Color;
use crate::spatial::canvas::Canvas;
use ndarray::{Array2, Slice};

/// Apply `f` to every interior 3x3 window
///
/// Border cells of the result stay zero.
pub fn filter_3x3<F>(channel: &Array2<u8>, f: F) -> Array2<u8>
where
    F: Fn([u8; 9]) -> u8,
{
    let (rows, cols) = channel.dim();
    let mut result = Array2::zeros((rows, cols));
    if rows < 3 || cols < 3 {
        return result;
    }

    for (window, out) in channel
        .windows((3, 3))
        .into_iter()
        .zip(
            result
                .slice_each_axis_mut(|_| Slice::new(1, Some(-1), 1))
                .iter_mut(),
        )
    {
        let mut values = [0u8; 9];
        for (value, &sample) in values.iter_mut().zip(window.iter()) {
            *value = sample;
        }
        *out = f(values);
    }
    result
}

/// Per-cell maximum over a 3x3 window
pub fn dilate(channel: &Array2<u8>) -> Array2<u8> {
    filter_3x3(channel, |values| values.into_iter().max().unwrap_or(0))
}

/// Per-cell median over a 3x3 window
pub fn median_blur(channel: &Array2<u8>) -> Array2<u8> {
    filter_3x3(channel, |mut values| {
        let (_, median, _) = values.select_nth_unstable(4);
        *median
    })
}

/// Split a color array into its three channels in storage order
pub fn split_channels(pixels: &Array2<Color>) -> [Array2<u8>; 3] {
    [
        pixels.mapv(|c| c.b),
        pixels.mapv(|c| c.g),
        pixels.mapv(|c| c.r),
    ]
}

/// Recombine three channels into colors
pub fn merge_channels(channels: &[Array2<u8>; 3]) -> Array2<Color> {
    let [b, g, r] = channels;
    ndarray::Zip::from(b)
        .and(g)
        .and(r)
        .map_collect(|&b, &g, &r| Color::new(b, g, r))
}

/// Dilation followed by a median blur, channel by channel
pub fn smooth(pixels: &Array2<Color>) -> Array2<Color> {
    merge_channels(&split_channels(pixels).map(|channel| median_blur(&dilate(&channel))))
}

/// Preview of `canvas` with smoothed colors blended into its empty cells
///
/// Filled cells are copied unchanged. An empty cell becomes
/// `sentinel * (1 - opacity) + smoothed * opacity`; a blend that lands back on
/// the sentinel is shown as mid-gray so empty regions stay visible.
pub fn embellish(canvas: &Canvas, opacity: f64) -> Array2<Color> {
    let sentinel = canvas.sentinel();
    let smoothed = smooth(canvas.as_array());

    ndarray::Zip::from(canvas.as_array())
        .and(&smoothed)
        .map_collect(|&original, &filtered| {
            if original != sentinel {
                return original;
            }
            let blended = original
                .scaled(1.0 - opacity)
                .saturating_add(filtered.scaled(opacity));
            if blended == sentinel {
                Color::MID_GRAY
            } else {
                blended
            }
        })
}
