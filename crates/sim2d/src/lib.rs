//! Sim2d: an interactive 2D field simulation sandbox.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all sim2d sub-crates. For most users, adding `sim2d` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sim2d::prelude::*;
//!
//! // A 128×96 sandbox, starting in heat mode.
//! let mut session = Session::new(128, 96).unwrap();
//!
//! // Drop some heat in the middle and run a few frames.
//! session.apply(Command::Paint { x: 64, y: 48, radius: 6, amp: 0.5 });
//! for _ in 0..10 {
//!     session.advance();
//! }
//!
//! // Shade the field for display.
//! let frame = session.frame().unwrap();
//! assert_eq!(frame.len(), 128 * 96 * 4);
//! assert!(session.heat().field().iter().any(|&v| v > 0.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sim2d-core` | Commands, parameters, the `Integrator` trait |
//! | [`grid`] | `sim2d-grid` | Grid geometry and double/triple field buffers |
//! | [`engines`] | `sim2d-engines` | Heat, wave, and Life engines plus substepping |
//! | [`render`] | `sim2d-render` | Palettes and field-to-RGBA8 shading |
//! | [`sandbox`] | `sim2d-sandbox` | The interactive `Session` layer |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Commands, parameters, and the integrator contract (`sim2d-core`).
pub use sim2d_core as types;

/// Grid geometry and buffered field storage (`sim2d-grid`).
///
/// Provides [`grid::Grid`] plus the [`grid::BufferPair`] and
/// [`grid::BufferTriple`] generation stores the engines are built on.
pub use sim2d_grid as grid;

/// Simulation engines (`sim2d-engines`).
///
/// [`engines::Heat2D`] explicit diffusion, [`engines::Wave2D`] leapfrog
/// waves, [`engines::Life2D`] Conway's automaton, and the
/// [`engines::SubstepController`] that keeps over-budget time steps stable.
pub use sim2d_engines as engines;

/// Palettes and shading (`sim2d-render`).
///
/// [`render::Palette`] colormaps and the per-mode shaders that fill RGBA8
/// pixel buffers.
pub use sim2d_render as render;

/// Interactive session layer (`sim2d-sandbox`).
///
/// [`sandbox::Session`] owns the engines, routes commands, and produces
/// display frames.
pub use sim2d_sandbox as sandbox;

/// Common imports for typical sim2d usage.
///
/// ```rust
/// use sim2d::prelude::*;
/// ```
pub mod prelude {
    pub use sim2d_core::{Command, Integrator, Param};
    pub use sim2d_engines::{Heat2D, Life2D, SubstepController, Wave2D};
    pub use sim2d_grid::Grid;
    pub use sim2d_render::Palette;
    pub use sim2d_sandbox::{Mode, Session};
}
