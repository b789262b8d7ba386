//! Leapfrog wave propagation engine.
//!
//! Central-difference-in-time integration of `u_tt = c² * laplace(u)` on a
//! rectangular grid with Dirichlet-zero boundaries. Reads both the current
//! and previous generations, so the field is triple-buffered; roles rotate
//! in O(1) after each step. The CFL condition bounds the stable time step;
//! [`Wave2D::stable_dt_max`] gives it and the substep controller enforces
//! it per frame.

use crate::stamp::stamp_disc;
use crate::COEFF_FLOOR;
use sim2d_core::Integrator;
use sim2d_grid::{BufferTriple, Grid, GridError};

/// Default wave speed.
pub const DEFAULT_WAVE_SPEED: f64 = 1.0;

/// Default requested time step, clamped to 90% of the CFL bound at
/// construction.
const DEFAULT_DT: f64 = 1e-3;

/// Leapfrog wave integrator over a triple-buffered scalar field.
///
/// Each step computes, for every interior cell,
/// ```text
/// u_next = 2u - u_prev + c² dt² * lap
/// ```
/// with the same 5-point Laplacian as the heat engine, forces the boundary
/// ring to zero, and rotates buffer roles: `prev <- current`,
/// `current <- u_next`, with the old previous buffer reused as the next
/// scratch target.
///
/// # Examples
///
/// ```
/// use sim2d_engines::Wave2D;
///
/// let mut wave = Wave2D::new(64, 64).unwrap();
/// wave.paint(32, 32, 6, 0.5);
/// wave.step();
/// assert!(wave.field().iter().any(|&v| v != 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct Wave2D {
    grid: Grid,
    c: f64,
    dt: f64,
    field: BufferTriple,
}

impl Wave2D {
    /// Create an engine with default wave speed and a stable default dt.
    pub fn new(nx: usize, ny: usize) -> Result<Self, GridError> {
        let grid = Grid::new(nx, ny)?;
        let mut engine = Self {
            grid,
            c: DEFAULT_WAVE_SPEED,
            dt: DEFAULT_DT,
            field: BufferTriple::new(grid.len()),
        };
        engine.dt = DEFAULT_DT.min(0.9 * engine.stable_dt_max());
        Ok(engine)
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current wave speed.
    pub fn wave_speed(&self) -> f64 {
        self.c
    }

    /// Replace the wave speed. Degenerate values are epsilon-floored at
    /// the stability bound rather than rejected.
    pub fn set_wave_speed(&mut self, c: f64) {
        self.c = c;
    }

    /// The current field, row-major, `nx * ny` samples.
    pub fn field(&self) -> &[f32] {
        self.field.current()
    }

    /// Mutable access to the current field, for seeding initial conditions.
    pub fn field_mut(&mut self) -> &mut [f32] {
        self.field.current_mut()
    }

    /// Advance the field by one leapfrog step of `dt`.
    pub fn step(&mut self) {
        let nx = self.grid.nx();
        let ny = self.grid.ny();
        let inv_hx2 = 1.0 / (self.grid.hx() * self.grid.hx());
        let inv_hy2 = 1.0 / (self.grid.hy() * self.grid.hy());
        let c2dt2 = self.c * self.c * self.dt * self.dt;

        let (u, u_prev, next) = self.field.split();
        // Dirichlet-zero boundary; the interior loop overwrites the rest.
        next.fill(0.0);
        for j in 1..ny - 1 {
            for i in 1..nx - 1 {
                let k = j * nx + i;
                let uij = u[k] as f64;
                let lap = (u[k + 1] as f64 - 2.0 * uij + u[k - 1] as f64) * inv_hx2
                    + (u[k + nx] as f64 - 2.0 * uij + u[k - nx] as f64) * inv_hy2;
                next[k] = (2.0 * uij - u_prev[k] as f64 + c2dt2 * lap) as f32;
            }
        }
        self.field.rotate();
    }

    /// Additive circular stamp on the current field, identical to the heat
    /// engine's painting semantics.
    pub fn paint(&mut self, ix: i32, iy: i32, radius: i32, amp: f32) {
        let nx = self.grid.nx();
        let ny = self.grid.ny();
        stamp_disc(nx, ny, self.field.current_mut(), ix, iy, radius, amp);
    }

    /// Largest stable time step (CFL): `min(hx, hy) / (c * sqrt(2))`.
    pub fn stable_dt_max(&self) -> f64 {
        let h = self.grid.hx().min(self.grid.hy());
        h / (self.c.max(COEFF_FLOOR) * std::f64::consts::SQRT_2)
    }

    /// Zero the current and previous fields in place.
    pub fn reset(&mut self) {
        self.field.reset();
    }
}

impl Integrator for Wave2D {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn set_dt(&mut self, dt: f64) {
        self.dt = dt;
    }

    fn stable_dt_max(&self) -> f64 {
        Wave2D::stable_dt_max(self)
    }

    fn step(&mut self) {
        Wave2D::step(self);
    }
}
