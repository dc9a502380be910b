//! Square neighborhoods clamped to canvas bounds

use crate::spatial::canvas::Position;
use std::ops::Range;

/// Column and row ranges covering `center ± radius`, clamped to `width × height`
pub fn region_spans(
    center: Position,
    radius: usize,
    width: usize,
    height: usize,
) -> (Range<usize>, Range<usize>) {
    let x_start = center.x.saturating_sub(radius);
    let y_start = center.y.saturating_sub(radius);
    let x_end = center.x.saturating_add(radius).saturating_add(1).min(width);
    let y_end = center.y.saturating_add(radius).saturating_add(1).min(height);
    (x_start..x_end, y_start..y_end)
}

/// In-bounds positions within `radius` of `center`, excluding `center`
///
/// With radius 1 this is the 8-connected Moore neighborhood.
pub fn neighbors(
    center: Position,
    radius: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Position> {
    let (xs, ys) = region_spans(center, radius, width, height);
    ys.flat_map(move |y| xs.clone().map(move |x| Position::new(x, y)))
        .filter(move |&pos| pos != center)
}
