//! Flat triangular storage for recombining lattices.
//!
//! A recombining binomial lattice over `N` steps has `N + 1` levels, level
//! `i` holding `i + 1` nodes: node `(i, j)` is the state after `j` up-moves
//! and `i − j` down-moves. All three per-run grids (stock prices, option
//! values, exercise flags) share this shape, so the storage is generic over
//! the node type.
//!
//! Nodes live in one contiguous allocation indexed by the closed-form
//! offset `i·(i+1)/2 + j`: no per-level vectors, no allocation churn
//! during backward induction, and level slices come out contiguous for the
//! inner loops.

/// Triangular grid over a recombining binomial lattice.
///
/// # Examples
/// ```
/// use pricer_lattice::Lattice;
///
/// let mut grid: Lattice<f64> = Lattice::new(2);
/// assert_eq!(grid.len(), 6); // 1 + 2 + 3 nodes
///
/// *grid.node_mut(2, 1) = 42.0;
/// assert_eq!(grid.node(2, 1), 42.0);
/// assert_eq!(grid.level(2), &[0.0, 42.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<T> {
    steps: usize,
    nodes: Vec<T>,
}

/// Offset of the first node of level `i` in the flat array.
#[inline]
const fn level_offset(i: usize) -> usize {
    i * (i + 1) / 2
}

impl<T: Copy + Default> Lattice<T> {
    /// Creates a lattice over `steps` time steps, all nodes default-filled.
    pub fn new(steps: usize) -> Self {
        Self {
            steps,
            nodes: vec![T::default(); level_offset(steps + 1)],
        }
    }

    /// Number of time steps (levels minus one).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Total node count, `(N+1)(N+2)/2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` (even a zero-step lattice has its root node); present
    /// for the usual `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Value at node `(level, j)`, `j` counting up-moves.
    ///
    /// # Panics
    /// Panics on out-of-range indices (programming error, not input error).
    #[inline]
    pub fn node(&self, level: usize, j: usize) -> T {
        debug_assert!(level <= self.steps && j <= level);
        self.nodes[level_offset(level) + j]
    }

    /// Mutable access to node `(level, j)`.
    #[inline]
    pub fn node_mut(&mut self, level: usize, j: usize) -> &mut T {
        debug_assert!(level <= self.steps && j <= level);
        &mut self.nodes[level_offset(level) + j]
    }

    /// All `level + 1` nodes of one time level, ascending in `j`.
    #[inline]
    pub fn level(&self, level: usize) -> &[T] {
        let start = level_offset(level);
        &self.nodes[start..start + level + 1]
    }

    /// Mutable slice of one time level.
    #[inline]
    pub fn level_mut(&mut self, level: usize) -> &mut [T] {
        let start = level_offset(level);
        &mut self.nodes[start..start + level + 1]
    }

    /// Mutable level `i` together with read-only level `i + 1`.
    ///
    /// Backward induction writes level `i` from level `i + 1`; the two
    /// levels are disjoint ranges of the flat array, so the split borrows
    /// both sides safely (and lets a parallel inner loop share the child
    /// slice across tasks).
    #[inline]
    pub fn level_pair_mut(&mut self, i: usize) -> (&mut [T], &[T]) {
        debug_assert!(i < self.steps);
        let split = level_offset(i + 1);
        let (head, tail) = self.nodes.split_at_mut(split);
        (&mut head[level_offset(i)..], &tail[..i + 2])
    }
}
