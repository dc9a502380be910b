//! Color representation, distance metrics and palette construction

/// Three-channel byte colors and distance metrics
pub mod bgr;
/// BGR to HSV conversion used for palette ordering
pub mod hsv;
/// Quantized palette enumeration and the consumable palette queue
pub mod palette;

pub use bgr::{Color, ColorMetric};
