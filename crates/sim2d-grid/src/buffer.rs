//! Fixed arenas of equally-sized buffers with O(1) role rotation.
//!
//! The engines double- or triple-buffer their fields: each step writes the
//! next generation into a scratch buffer while reading the current (and,
//! for leapfrog, the previous) generation, then exchanges buffer *roles*
//! rather than buffer *contents*. Role exchange is an index update, so the
//! per-step swap cost is O(1) regardless of grid size.

/// Two equally-sized buffers alternating between current and scratch roles.
///
/// The per-step lifecycle is:
/// 1. [`split()`](BufferPair::split) — read the current buffer, write the
///    scratch buffer
/// 2. [`swap()`](BufferPair::swap) — the scratch buffer becomes current;
///    the old current buffer is reused as the next scratch target
///
/// # Examples
///
/// ```
/// use sim2d_grid::BufferPair;
///
/// let mut pair: BufferPair<f32> = BufferPair::new(4);
/// let (cur, next) = pair.split();
/// next[0] = cur[0] + 1.0;
/// pair.swap();
/// assert_eq!(pair.current()[0], 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct BufferPair<T> {
    bufs: [Vec<T>; 2],
    /// Which buffer currently holds the published field (0 or 1).
    cur: usize,
}

impl<T: Clone + Default> BufferPair<T> {
    /// Create a pair of zero-initialised buffers of `len` elements each.
    pub fn new(len: usize) -> Self {
        Self {
            bufs: [vec![T::default(); len], vec![T::default(); len]],
            cur: 0,
        }
    }

    /// Length of each buffer.
    pub fn len(&self) -> usize {
        self.bufs[0].len()
    }

    /// Whether the buffers are zero-length.
    pub fn is_empty(&self) -> bool {
        self.bufs[0].is_empty()
    }

    /// The current (published) buffer.
    pub fn current(&self) -> &[T] {
        &self.bufs[self.cur]
    }

    /// Mutable view of the current buffer, for in-place perturbation
    /// (painting, toggling) between steps.
    pub fn current_mut(&mut self) -> &mut [T] {
        &mut self.bufs[self.cur]
    }

    /// Borrow `(current, scratch)` simultaneously for a step computation.
    pub fn split(&mut self) -> (&[T], &mut [T]) {
        let (a, b) = self.bufs.split_at_mut(1);
        if self.cur == 0 {
            (a[0].as_slice(), b[0].as_mut_slice())
        } else {
            (b[0].as_slice(), a[0].as_mut_slice())
        }
    }

    /// Exchange roles: scratch becomes current. O(1), no element copies.
    pub fn swap(&mut self) {
        self.cur ^= 1;
    }

    /// Zero the current buffer in place. The scratch buffer is left as-is;
    /// it is fully overwritten by the next step.
    pub fn reset(&mut self) {
        self.bufs[self.cur].fill(T::default());
    }
}

/// Three equally-sized buffers with current/previous/scratch roles.
///
/// Used by the leapfrog integrator, which reads both the current and the
/// previous generation. [`rotate()`](BufferTriple::rotate) advances the
/// roles after a step: the freshly written scratch buffer becomes current,
/// the old current becomes previous, and the buffer that held the previous
/// generation is reused as the next scratch target.
#[derive(Clone, Debug)]
pub struct BufferTriple {
    bufs: [Vec<f32>; 3],
    cur: usize,
    prev: usize,
}

impl BufferTriple {
    /// Create three zero-initialised buffers of `len` elements each.
    pub fn new(len: usize) -> Self {
        Self {
            bufs: [vec![0.0; len], vec![0.0; len], vec![0.0; len]],
            cur: 0,
            prev: 1,
        }
    }

    /// Length of each buffer.
    pub fn len(&self) -> usize {
        self.bufs[0].len()
    }

    /// Whether the buffers are zero-length.
    pub fn is_empty(&self) -> bool {
        self.bufs[0].is_empty()
    }

    fn scratch_role(&self) -> usize {
        // Roles are a permutation of {0, 1, 2}.
        3 - self.cur - self.prev
    }

    /// The current (published) buffer.
    pub fn current(&self) -> &[f32] {
        &self.bufs[self.cur]
    }

    /// The previous-generation buffer.
    pub fn previous(&self) -> &[f32] {
        &self.bufs[self.prev]
    }

    /// Mutable view of the current buffer, for in-place perturbation.
    pub fn current_mut(&mut self) -> &mut [f32] {
        &mut self.bufs[self.cur]
    }

    /// Mutable view of the previous buffer (zeroed on reset).
    pub fn previous_mut(&mut self) -> &mut [f32] {
        &mut self.bufs[self.prev]
    }

    /// Borrow `(current, previous, scratch)` simultaneously for a step.
    pub fn split(&mut self) -> (&[f32], &[f32], &mut [f32]) {
        let scratch = self.scratch_role();
        let [b0, b1, b2] = &mut self.bufs;
        match (self.cur, self.prev, scratch) {
            (0, 1, 2) => (b0.as_slice(), b1.as_slice(), b2.as_mut_slice()),
            (0, 2, 1) => (b0.as_slice(), b2.as_slice(), b1.as_mut_slice()),
            (1, 0, 2) => (b1.as_slice(), b0.as_slice(), b2.as_mut_slice()),
            (1, 2, 0) => (b1.as_slice(), b2.as_slice(), b0.as_mut_slice()),
            (2, 0, 1) => (b2.as_slice(), b0.as_slice(), b1.as_mut_slice()),
            (2, 1, 0) => (b2.as_slice(), b1.as_slice(), b0.as_mut_slice()),
            _ => unreachable!("cur/prev/scratch roles are a permutation of 0..3"),
        }
    }

    /// Advance roles after a step: `previous <- current`,
    /// `current <- scratch` (the newly computed field), and the old
    /// previous buffer becomes the next scratch. O(1), no element copies.
    pub fn rotate(&mut self) {
        let scratch = self.scratch_role();
        self.prev = self.cur;
        self.cur = scratch;
    }

    /// Zero the current and previous buffers in place.
    pub fn reset(&mut self) {
        self.bufs[self.cur].fill(0.0);
        self.bufs[self.prev].fill(0.0);
    }
}
