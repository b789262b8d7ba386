//! Conway's Game of Life on a Moore-8 neighbourhood.
//!
//! Independent of the PDE grid: the automaton needs no physical spacing,
//! only extents. Cells are `u8` values that are exactly 0 or 1; the field
//! is double-buffered and roles swap in O(1) per generation. Cells beyond
//! the grid count as dead (no wraparound).

use rand::{Rng, RngExt};
use sim2d_grid::BufferPair;
use smallvec::SmallVec;

/// Default alive probability for randomization.
pub const DEFAULT_FILL: f64 = 0.15;

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Collect the flat indices of the in-bounds Moore neighbours of `(x, y)`.
fn moore_neighbours_flat(x: i32, y: i32, nx: i32, ny: i32) -> SmallVec<[usize; 8]> {
    let mut result = SmallVec::new();
    for (dx, dy) in OFFSETS_8 {
        let px = x + dx;
        let py = y + dy;
        if px >= 0 && px < nx && py >= 0 && py < ny {
            result.push(py as usize * nx as usize + px as usize);
        }
    }
    result
}

/// Conway automaton over a double-buffered cell field.
///
/// Transition rule per generation: a live cell survives with 2 or 3 live
/// Moore neighbours; a dead cell becomes alive with exactly 3; everything
/// else dies.
///
/// # Examples
///
/// ```
/// use sim2d_engines::Life2D;
///
/// // A blinker oscillates with period 2.
/// let mut life = Life2D::new(5, 5);
/// for x in 1..4 {
///     life.set_cell(x, 2, true);
/// }
/// life.step();
/// assert!(life.cell(2, 1) && life.cell(2, 2) && life.cell(2, 3));
/// assert!(!life.cell(1, 2) && !life.cell(3, 2));
/// ```
#[derive(Clone, Debug)]
pub struct Life2D {
    nx: usize,
    ny: usize,
    cells: BufferPair<u8>,
}

impl Life2D {
    /// Create an all-dead automaton of `nx * ny` cells.
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            cells: BufferPair::new(nx * ny),
        }
    }

    /// Number of cells along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// The current generation, row-major, values exactly 0 or 1.
    pub fn cells(&self) -> &[u8] {
        self.cells.current()
    }

    /// State of cell `(i, j)`; out-of-range coordinates read as dead.
    pub fn cell(&self, i: usize, j: usize) -> bool {
        i < self.nx && j < self.ny && self.cells.current()[j * self.nx + i] != 0
    }

    /// Set a single cell; out-of-range coordinates are ignored.
    pub fn set_cell(&mut self, i: usize, j: usize, alive: bool) {
        if i < self.nx && j < self.ny {
            let nx = self.nx;
            self.cells.current_mut()[j * nx + i] = alive as u8;
        }
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells.current().iter().filter(|&&v| v != 0).count()
    }

    /// Reseed every cell independently, alive with probability `p`.
    ///
    /// The generator is passed in so that determinism is injectable: the
    /// sandbox seeds a ChaCha8 RNG with a fixed constant, making repeated
    /// randomizations bit-identical across runs.
    pub fn randomize<R: Rng>(&mut self, p: f64, rng: &mut R) {
        for v in self.cells.current_mut() {
            *v = (rng.random::<f64>() < p) as u8;
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        let nx = self.nx as i32;
        let ny = self.ny as i32;
        let (a, b) = self.cells.split();
        for y in 0..ny {
            for x in 0..nx {
                let k = y as usize * nx as usize + x as usize;
                let n = moore_neighbours_flat(x, y, nx, ny)
                    .iter()
                    .filter(|&&nb| a[nb] != 0)
                    .count();
                b[k] = if a[k] != 0 {
                    (n == 2 || n == 3) as u8
                } else {
                    (n == 3) as u8
                };
            }
        }
        self.cells.swap();
    }

    /// Interactive toggling. A non-positive radius flips the single cell
    /// at `(ix, iy)`; a positive radius *sets* (never flips) every cell
    /// within Euclidean `radius` alive, clamped to the grid extent.
    /// An out-of-range center is a no-op.
    pub fn toggle(&mut self, ix: i32, iy: i32, radius: i32) {
        let nx = self.nx as i32;
        let ny = self.ny as i32;
        if ix < 0 || iy < 0 || ix >= nx || iy >= ny {
            return;
        }
        let cells = self.cells.current_mut();
        if radius <= 0 {
            cells[iy as usize * nx as usize + ix as usize] ^= 1;
        } else {
            // Widened squares and saturating bounds, as in the stamp
            // helper, keep oversized brush radii panic-free.
            let r2 = i64::from(radius) * i64::from(radius);
            let y0 = iy.saturating_sub(radius).max(0);
            let y1 = iy.saturating_add(radius).saturating_add(1).min(ny);
            let x0 = ix.saturating_sub(radius).max(0);
            let x1 = ix.saturating_add(radius).saturating_add(1).min(nx);
            for y in y0..y1 {
                for x in x0..x1 {
                    let dx = i64::from(x) - i64::from(ix);
                    let dy = i64::from(y) - i64::from(iy);
                    if dx * dx + dy * dy <= r2 {
                        cells[y as usize * nx as usize + x as usize] = 1;
                    }
                }
            }
        }
    }

    /// Kill every cell in place.
    pub fn clear(&mut self) {
        self.cells.reset();
    }
}
