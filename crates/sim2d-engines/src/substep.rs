//! Adaptive substepping for conditionally stable integrators.
//!
//! Interactive parameter tweaking can push the requested `dt` past an
//! engine's stability bound. Instead of rejecting the step, the controller
//! splits it into a bounded burst of equal sub-steps, each within (or as
//! close as the cap allows to) the bound, then restores the requested dt.

use sim2d_core::Integrator;

/// Default cap on sub-steps per frame.
///
/// The cap bounds worst-case per-frame work, not correctness: if even
/// `MAX_SUBSTEPS` sub-steps cannot reach the stability bound, the burst
/// runs anyway and the field may visibly blow up until the user backs the
/// parameters off.
pub const MAX_SUBSTEPS: u32 = 10;

/// Splits over-budget time steps into stable sub-steps.
///
/// # Examples
///
/// ```
/// use sim2d_core::Integrator;
/// use sim2d_engines::{Heat2D, SubstepController};
///
/// let mut heat = Heat2D::new(64, 64).unwrap();
/// let requested = heat.stable_dt_max() * 2.5;
/// heat.set_dt(requested);
///
/// let taken = SubstepController::new().advance(&mut heat);
/// assert_eq!(taken, 3);
/// assert_eq!(heat.dt(), requested); // the sub-step dt is transient
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SubstepController {
    cap: u32,
}

impl SubstepController {
    /// Controller with the default sub-step cap.
    pub fn new() -> Self {
        Self { cap: MAX_SUBSTEPS }
    }

    /// Controller with a custom sub-step cap (must be >= 1; lower values
    /// are clamped up).
    pub fn with_cap(cap: u32) -> Self {
        Self { cap: cap.max(1) }
    }

    /// Advance the engine by its requested `dt`, substepping if the
    /// request exceeds the stability bound. Returns the number of steps
    /// taken; the engine's `dt` is unchanged on return.
    pub fn advance<E: Integrator>(&self, engine: &mut E) -> u32 {
        let requested = engine.dt();
        let bound = engine.stable_dt_max();
        if requested <= bound {
            engine.step();
            return 1;
        }

        // Saturating float-to-int cast keeps absurd ratios at the cap.
        let substeps = ((requested / bound).ceil() as u32).clamp(1, self.cap);
        engine.set_dt(requested / substeps as f64);
        for _ in 0..substeps {
            engine.step();
        }
        engine.set_dt(requested);
        substeps
    }
}

impl Default for SubstepController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every (dt, step) the controller drives, with a fixed bound.
    struct RecordingIntegrator {
        dt: f64,
        bound: f64,
        steps: Vec<f64>,
    }

    impl RecordingIntegrator {
        fn new(dt: f64, bound: f64) -> Self {
            Self {
                dt,
                bound,
                steps: Vec::new(),
            }
        }
    }

    impl Integrator for RecordingIntegrator {
        fn dt(&self) -> f64 {
            self.dt
        }

        fn set_dt(&mut self, dt: f64) {
            self.dt = dt;
        }

        fn stable_dt_max(&self) -> f64 {
            self.bound
        }

        fn step(&mut self) {
            self.steps.push(self.dt);
        }
    }

    #[test]
    fn in_bound_dt_takes_a_single_step() {
        let mut engine = RecordingIntegrator::new(0.5, 1.0);
        let taken = SubstepController::new().advance(&mut engine);
        assert_eq!(taken, 1);
        assert_eq!(engine.steps, vec![0.5]);
        assert_eq!(engine.dt(), 0.5);
    }

    #[test]
    fn triple_bound_runs_three_substeps_and_restores_dt() {
        let mut engine = RecordingIntegrator::new(3.0, 1.0);
        let taken = SubstepController::new().advance(&mut engine);
        assert_eq!(taken, 3);
        assert_eq!(engine.steps, vec![1.0, 1.0, 1.0]);
        assert_eq!(engine.dt(), 3.0, "requested dt must be restored");
    }

    #[test]
    fn fractional_ratio_rounds_up() {
        let mut engine = RecordingIntegrator::new(0.25, 0.1);
        let taken = SubstepController::new().advance(&mut engine);
        assert_eq!(taken, 3);
        for &dt in &engine.steps {
            assert!((dt - 0.25 / 3.0).abs() < 1e-15);
        }
    }

    #[test]
    fn substeps_are_capped() {
        let mut engine = RecordingIntegrator::new(100.0, 1.0);
        let taken = SubstepController::new().advance(&mut engine);
        assert_eq!(taken, MAX_SUBSTEPS);
        assert_eq!(engine.steps.len(), MAX_SUBSTEPS as usize);
        assert_eq!(engine.dt(), 100.0);
    }

    #[test]
    fn degenerate_bound_hits_the_cap_without_panicking() {
        let mut engine = RecordingIntegrator::new(1.0, 1e-300);
        let taken = SubstepController::new().advance(&mut engine);
        assert_eq!(taken, MAX_SUBSTEPS);
    }

    #[test]
    fn custom_cap_clamps_to_at_least_one() {
        let controller = SubstepController::with_cap(0);
        let mut engine = RecordingIntegrator::new(5.0, 1.0);
        let taken = controller.advance(&mut engine);
        assert_eq!(taken, 1);
        assert_eq!(engine.steps, vec![5.0]);
        assert_eq!(engine.dt(), 5.0);
    }
}
