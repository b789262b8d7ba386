//! 2D rectangular grid with unit-square cell spacing.

use crate::error::GridError;

/// A rectangular grid of `nx * ny` cells over the unit square.
///
/// Cell spacings `hx = 1/(nx-1)` and `hy = 1/(ny-1)` are derived at
/// construction and immutable afterwards. Cells are addressed by
/// `(i, j)` with `0 <= i < nx`, `0 <= j < ny` and stored row-major
/// (`j` outer, `i` inner).
///
/// # Examples
///
/// ```
/// use sim2d_grid::Grid;
///
/// let g = Grid::new(256, 128).unwrap();
/// assert_eq!(g.len(), 256 * 128);
/// assert_eq!(g.index(0, 1), 256);
/// assert!(g.is_boundary(0, 64));
/// assert!(!g.is_boundary(1, 64));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    nx: usize,
    ny: usize,
    hx: f64,
    hy: f64,
}

impl Grid {
    /// Create a grid with the given extents.
    ///
    /// Returns [`GridError::AxisTooSmall`] if either axis is below two
    /// cells, since the spacing `1/(n-1)` would be degenerate.
    pub fn new(nx: usize, ny: usize) -> Result<Self, GridError> {
        if nx < 2 {
            return Err(GridError::AxisTooSmall {
                name: "nx",
                value: nx,
            });
        }
        if ny < 2 {
            return Err(GridError::AxisTooSmall {
                name: "ny",
                value: ny,
            });
        }
        Ok(Self {
            nx,
            ny,
            hx: 1.0 / (nx - 1) as f64,
            hy: 1.0 / (ny - 1) as f64,
        })
    }

    /// Number of cells along x.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of cells along y.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cell spacing along x.
    pub fn hx(&self) -> f64 {
        self.hx
    }

    /// Cell spacing along y.
    pub fn hy(&self) -> f64 {
        self.hy
    }

    /// Total cell count `nx * ny`.
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    /// Always `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Row-major flat index of cell `(i, j)`: `j * nx + i`.
    ///
    /// Callers must keep `i < nx` and `j < ny`; the mapping is a bijection
    /// onto `[0, nx * ny)` for in-range coordinates.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    /// Whether `(i, j)` lies on the outermost ring of the grid.
    #[inline]
    pub fn is_boundary(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.nx - 1 || j == self.ny - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spacing_is_inverse_of_extent_minus_one() {
        let g = Grid::new(256, 129).unwrap();
        assert_eq!(g.hx(), 1.0 / 255.0);
        assert_eq!(g.hy(), 1.0 / 128.0);
    }

    #[test]
    fn rejects_degenerate_axes() {
        assert_eq!(
            Grid::new(1, 256),
            Err(GridError::AxisTooSmall {
                name: "nx",
                value: 1
            })
        );
        assert_eq!(
            Grid::new(256, 0),
            Err(GridError::AxisTooSmall {
                name: "ny",
                value: 0
            })
        );
        assert!(Grid::new(2, 2).is_ok());
    }

    #[test]
    fn boundary_ring() {
        let g = Grid::new(4, 3).unwrap();
        assert!(g.is_boundary(0, 1));
        assert!(g.is_boundary(3, 1));
        assert!(g.is_boundary(2, 0));
        assert!(g.is_boundary(2, 2));
        assert!(!g.is_boundary(1, 1));
        assert!(!g.is_boundary(2, 1));
    }

    proptest! {
        #[test]
        fn index_is_a_bijection(nx in 2usize..64, ny in 2usize..64) {
            let g = Grid::new(nx, ny).unwrap();
            let mut seen = vec![false; g.len()];
            for j in 0..ny {
                for i in 0..nx {
                    let k = g.index(i, j);
                    prop_assert!(k < g.len(), "index {k} out of range");
                    prop_assert!(!seen[k], "index {k} hit twice");
                    seen[k] = true;
                }
            }
            prop_assert!(seen.iter().all(|&s| s), "some index never produced");
        }

        #[test]
        fn index_is_row_major(nx in 2usize..64, ny in 2usize..64) {
            let g = Grid::new(nx, ny).unwrap();
            prop_assert_eq!(g.index(0, 0), 0);
            prop_assert_eq!(g.index(1, 0), 1);
            prop_assert_eq!(g.index(0, 1), nx);
            prop_assert_eq!(g.index(nx - 1, ny - 1), nx * ny - 1);
        }
    }
}
