//! Shading errors.

use std::error::Error;
use std::fmt;

/// Errors raised while shading a field into a pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// The output buffer does not hold exactly 4 bytes per field cell.
    FrameLengthMismatch {
        /// Number of field cells to shade.
        cells: usize,
        /// Length of the pixel buffer in bytes.
        bytes: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameLengthMismatch { cells, bytes } => write!(
                f,
                "pixel buffer holds {bytes} bytes but {cells} cells need {}",
                cells * 4
            ),
        }
    }
}

impl Error for RenderError {}
