//! Control commands routed from the input collaborator to the sandbox.
//!
//! The event-loop collaborator translates key presses and mouse state into
//! [`Command`] values and submits them to the session. Commands that do not
//! apply to the active engine (e.g. [`Command::Randomize`] while a PDE
//! engine is active) are silently ignored — interactive robustness is
//! preferred over strict validation.

/// A tunable simulation parameter addressed by [`Command::ParamUp`] and
/// [`Command::ParamDown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    /// Heat diffusivity `alpha` (heat engine only).
    Diffusivity,
    /// Wave propagation speed `c` (wave engine only).
    WaveSpeed,
    /// Requested integrator time step `dt` (heat and wave engines).
    Dt,
}

/// A control operation applied to the sandbox session.
///
/// Coordinates are in grid cells, signed so that off-grid input (e.g. a
/// mouse drag leaving the window) can be passed through unchanged and
/// rejected or clamped by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Toggle the paused state.
    TogglePause,
    /// Reset the active engine: zero the PDE field(s) or clear the automaton.
    Reset,
    /// Advance the active engine by a single step, even while paused.
    StepOnce,
    /// Multiplicatively increase a parameter of the active engine.
    ParamUp(Param),
    /// Multiplicatively decrease a parameter of the active engine.
    ParamDown(Param),
    /// Additive circular stamp on the active PDE field.
    Paint {
        /// Stamp center, x cell index.
        x: i32,
        /// Stamp center, y cell index.
        y: i32,
        /// Stamp radius in cells.
        radius: i32,
        /// Amplitude added to each cell inside the stamp.
        amp: f32,
    },
    /// Flip one automaton cell (`radius <= 0`) or set a disk of cells alive.
    Toggle {
        /// Center x cell index.
        x: i32,
        /// Center y cell index.
        y: i32,
        /// Disk radius in cells; non-positive flips the single center cell.
        radius: i32,
    },
    /// Reseed the automaton, each cell alive with probability `p`.
    Randomize {
        /// Per-cell alive probability in `[0, 1]`.
        p: f64,
    },
    /// Select a palette by index (0 gray, 1 fire, 2 blue-red).
    /// Out-of-range indices are ignored.
    SetPalette(u8),
}
