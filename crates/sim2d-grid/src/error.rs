//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Grid`](crate::Grid) construction.
///
/// An axis below two cells is the one fatal configuration error in the
/// core: the cell spacing `1/(n-1)` becomes degenerate, so construction
/// rejects it instead of deferring to undefined arithmetic later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid axis has fewer than two cells.
    AxisTooSmall {
        /// Which axis (`"nx"` or `"ny"`).
        name: &'static str,
        /// The rejected extent.
        value: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisTooSmall { name, value } => {
                write!(f, "grid axis {name} must be >= 2, got {value}")
            }
        }
    }
}

impl Error for GridError {}
