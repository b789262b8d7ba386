//! Session state and command routing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim2d_core::{Command, Integrator, Param};
use sim2d_engines::{Heat2D, Life2D, SubstepController, Wave2D, DEFAULT_FILL};
use sim2d_grid::GridError;
use sim2d_render::{shade_heat, shade_life, shade_wave, Palette, RenderError};

/// Fixed reseed constant, so reproducing a session needs no recorded
/// entropy.
const LIFE_SEED: u64 = 12345;

/// Multiplicative step for diffusivity tweaks.
const ALPHA_FACTOR: f64 = 1.2;
/// Multiplicative step for wave speed tweaks.
const WAVE_SPEED_FACTOR: f64 = 1.1;
/// Multiplicative step for time step tweaks.
const DT_FACTOR: f64 = 1.2;

/// Which simulation the session is currently running and displaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Explicit heat diffusion.
    #[default]
    Heat,
    /// Leapfrog wave propagation.
    Wave,
    /// Conway's Game of Life.
    Life,
}

/// One interactive sandbox over a shared grid size.
///
/// All three engines exist for the session's lifetime; switching modes
/// never resets the inactive fields. Commands aimed at an engine that is
/// not active are dropped rather than queued.
///
/// # Examples
///
/// ```
/// use sim2d_core::Command;
/// use sim2d_sandbox::{Mode, Session};
///
/// let mut session = Session::new(64, 64).unwrap();
/// session.apply(Command::Paint { x: 32, y: 32, radius: 6, amp: 0.5 });
/// session.advance();
/// let frame = session.frame().unwrap();
/// assert_eq!(frame.len(), 64 * 64 * 4);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    heat: Heat2D,
    wave: Wave2D,
    life: Life2D,
    mode: Mode,
    paused: bool,
    palette: Palette,
    controller: SubstepController,
    last_substeps: u32,
    rng: ChaCha8Rng,
    pixels: Vec<u8>,
}

impl Session {
    /// Create a session over an `nx * ny` grid. The Life field starts
    /// pre-populated from the fixed seed; the PDE fields start at zero.
    pub fn new(nx: usize, ny: usize) -> Result<Self, GridError> {
        let mut session = Self {
            heat: Heat2D::new(nx, ny)?,
            wave: Wave2D::new(nx, ny)?,
            life: Life2D::new(nx, ny),
            mode: Mode::default(),
            paused: false,
            palette: Palette::default(),
            controller: SubstepController::new(),
            last_substeps: 0,
            rng: ChaCha8Rng::seed_from_u64(LIFE_SEED),
            pixels: vec![0; nx * ny * 4],
        };
        let fill = DEFAULT_FILL;
        session.life.randomize(fill, &mut session.rng);
        Ok(session)
    }

    /// The active simulation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the active simulation; inactive fields keep their state.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Whether time is currently frozen.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// The palette used for shading.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The heat engine, for inspection.
    pub fn heat(&self) -> &Heat2D {
        &self.heat
    }

    /// The wave engine, for inspection.
    pub fn wave(&self) -> &Wave2D {
        &self.wave
    }

    /// The Life automaton, for inspection.
    pub fn life(&self) -> &Life2D {
        &self.life
    }

    /// Requested time step of the active engine; 0 for Life, which has no
    /// physical clock.
    pub fn dt(&self) -> f64 {
        match self.mode {
            Mode::Heat => self.heat.dt(),
            Mode::Wave => self.wave.dt(),
            Mode::Life => 0.0,
        }
    }

    /// Stability bound of the active engine; infinite for Life.
    pub fn stable_dt_max(&self) -> f64 {
        match self.mode {
            Mode::Heat => self.heat.stable_dt_max(),
            Mode::Wave => self.wave.stable_dt_max(),
            Mode::Life => f64::INFINITY,
        }
    }

    /// Sub-steps taken by the most recent advance, for HUD display.
    pub fn last_substeps(&self) -> u32 {
        self.last_substeps
    }

    /// Route one command to the active engine or the session itself.
    ///
    /// Commands that do not apply to the active mode are dropped: painting
    /// in Life, toggling cells in a PDE mode, or tuning a parameter the
    /// active engine does not have all leave the session untouched.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.paused = !self.paused,
            Command::Reset => match self.mode {
                Mode::Heat => self.heat.reset(),
                Mode::Wave => self.wave.reset(),
                Mode::Life => self.life.clear(),
            },
            Command::StepOnce => {
                self.last_substeps = self.advance_active();
            }
            Command::ParamUp(param) => self.scale_param(param, true),
            Command::ParamDown(param) => self.scale_param(param, false),
            Command::Paint { x, y, radius, amp } => match self.mode {
                Mode::Heat => self.heat.paint(x, y, radius, amp),
                Mode::Wave => self.wave.paint(x, y, radius, amp),
                Mode::Life => {}
            },
            Command::Toggle { x, y, radius } => {
                if self.mode == Mode::Life {
                    self.life.toggle(x, y, radius);
                }
            }
            Command::Randomize { p } => {
                if self.mode == Mode::Life {
                    self.life.randomize(p, &mut self.rng);
                }
            }
            Command::SetPalette(index) => {
                if let Some(palette) = Palette::from_index(index) {
                    self.palette = palette;
                }
            }
        }
    }

    fn scale_param(&mut self, param: Param, up: bool) {
        let apply = |value: f64, factor: f64| if up { value * factor } else { value / factor };
        match (param, self.mode) {
            (Param::Diffusivity, Mode::Heat) => {
                let alpha = apply(self.heat.alpha(), ALPHA_FACTOR);
                self.heat.set_alpha(alpha);
            }
            (Param::WaveSpeed, Mode::Wave) => {
                let c = apply(self.wave.wave_speed(), WAVE_SPEED_FACTOR);
                self.wave.set_wave_speed(c);
            }
            (Param::Dt, Mode::Heat) => {
                let dt = apply(self.heat.dt(), DT_FACTOR);
                self.heat.set_dt(dt);
            }
            (Param::Dt, Mode::Wave) => {
                let dt = apply(self.wave.dt(), DT_FACTOR);
                self.wave.set_dt(dt);
            }
            _ => {}
        }
    }

    /// Advance the active simulation by one frame, unless paused.
    /// Returns the number of engine steps taken (0 while paused).
    pub fn advance(&mut self) -> u32 {
        if self.paused {
            self.last_substeps = 0;
            return 0;
        }
        self.last_substeps = self.advance_active();
        self.last_substeps
    }

    fn advance_active(&mut self) -> u32 {
        match self.mode {
            Mode::Heat => self.controller.advance(&mut self.heat),
            Mode::Wave => self.controller.advance(&mut self.wave),
            Mode::Life => {
                self.life.step();
                1
            }
        }
    }

    /// Shade the active field into the session's RGBA8 frame buffer.
    pub fn frame(&mut self) -> Result<&[u8], RenderError> {
        match self.mode {
            Mode::Heat => shade_heat(self.heat.field(), self.palette, &mut self.pixels)?,
            Mode::Wave => shade_wave(self.wave.field(), self.palette, &mut self.pixels)?,
            Mode::Life => shade_life(self.life.cells(), self.palette, &mut self.pixels)?,
        }
        Ok(&self.pixels)
    }
}
