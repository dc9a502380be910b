//! Error types for algorithm and I/O operations

use crate::color::Color;
use crate::spatial::canvas::Position;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Failed to load a seed mask from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Input data doesn't meet algorithm requirements
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Canvas access outside its bounds
    OutOfBounds {
        /// Offending position
        position: Position,
        /// Canvas dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Attempt to write a cell that already holds a color
    CanvasOverwrite {
        /// Offending position
        position: Position,
        /// Color already stored there
        existing: Color,
    },

    /// Frontier bookkeeping disagrees with the canvas
    ///
    /// Raised when the selected position is missing from the frontier, or
    /// when the frontier holds a filled position.
    FrontierInvariant {
        /// Offending position
        position: Position,
        /// Placement number at which the violation was detected
        step: usize,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl AlgorithmError {
    /// Whether the error signals a bookkeeping bug rather than bad input or I/O
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::CanvasOverwrite { .. } | Self::FrontierInvariant { .. }
        )
    }
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position {position} is outside the {}x{} canvas",
                    dimensions.0, dimensions.1
                )
            }
            Self::CanvasOverwrite { position, existing } => {
                write!(
                    f,
                    "Position {position} already holds {existing} and cannot be overwritten"
                )
            }
            Self::FrontierInvariant { position, step } => {
                write!(
                    f,
                    "Frontier invariant violated at placement {step}: position {position}"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
