//! Rectangular grid geometry and role-swapped field buffers.
//!
//! [`Grid`] maps 2D cell coordinates onto a dense row-major index space and
//! carries the derived cell spacings used by the finite-difference stencils.
//! [`BufferPair`] and [`BufferTriple`] hold the per-engine field storage:
//! fixed arenas of equally-sized buffers whose current/previous/scratch
//! roles rotate in O(1) at the end of each step, so no field data is ever
//! copied element-by-element during a swap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod error;
pub mod grid;

pub use buffer::{BufferPair, BufferTriple};
pub use error::GridError;
pub use grid::Grid;
