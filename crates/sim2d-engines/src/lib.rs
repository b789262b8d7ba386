//! Simulation engines for the sim2d sandbox.
//!
//! Three engines over rectangular grids:
//! - [`Heat2D`] — explicit (FTCS) diffusion with a stability bound of
//!   `0.5 * min(hx², hy²) / alpha`
//! - [`Wave2D`] — leapfrog wave propagation with the 2D CFL bound
//!   `min(hx, hy) / (c * sqrt(2))`
//! - [`Life2D`] — Conway's Game of Life on a Moore-8 neighbourhood
//!
//! The PDE engines implement [`sim2d_core::Integrator`] and are driven
//! through [`SubstepController`], which breaks a requested time step that
//! exceeds the stability bound into a bounded burst of stable sub-steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod heat;
pub mod life;
mod stamp;
pub mod substep;
pub mod wave;

pub use heat::{Heat2D, DEFAULT_ALPHA};
pub use life::{Life2D, DEFAULT_FILL};
pub use substep::{SubstepController, MAX_SUBSTEPS};
pub use wave::{Wave2D, DEFAULT_WAVE_SPEED};

/// Epsilon floor applied to diffusivity / wave speed in the stability
/// bounds, guarding the division when a parameter is scaled down to ~0.
pub(crate) const COEFF_FLOOR: f64 = 1e-12;
