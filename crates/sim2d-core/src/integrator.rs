//! The [`Integrator`] trait implemented by conditionally stable engines.

/// A time-stepped field engine with a conditional stability bound.
///
/// Implemented by the explicit finite-difference engines (heat, wave).
/// The substep controller drives any `Integrator` generically: it compares
/// the requested [`dt`](Integrator::dt) against
/// [`stable_dt_max`](Integrator::stable_dt_max) and, when the request
/// exceeds the bound, temporarily lowers the step size via
/// [`set_dt`](Integrator::set_dt) for a burst of sub-steps.
///
/// # Contract
///
/// - `step()` fully computes the next field before exchanging buffer roles;
///   a caller never observes a partially updated field.
/// - `stable_dt_max()` must be finite and positive for any reachable
///   parameter state (degenerate coefficients are epsilon-floored).
/// - `set_dt` followed by `dt` returns the value just set; the engine never
///   rescales dt on its own.
pub trait Integrator {
    /// The currently requested time step.
    fn dt(&self) -> f64;

    /// Replace the requested time step.
    fn set_dt(&mut self, dt: f64);

    /// Largest time step for which the explicit scheme is stable
    /// (diffusion bound or CFL, depending on the engine).
    fn stable_dt_max(&self) -> f64;

    /// Advance the field by one step of the current `dt`.
    fn step(&mut self);
}
