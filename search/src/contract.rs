//! Search world contract trait.

use dustpan_kernel::world::grid::Grid;
use dustpan_kernel::world::state::WorldState;
use dustpan_kernel::world::successors::{successors, Successor};

/// Trait for worlds that support search.
///
/// # Contract
///
/// - `successors` must be deterministic: same state → same successors in the
///   same order. Depth-first search explores the first returned successor
///   first, so the order decides which of several plans it finds.
/// - `successors` must not mutate anything observable.
pub trait SearchWorld {
    /// Enumerate all legal `(action, state)` transitions out of `state`.
    fn successors(&self, state: &WorldState) -> Vec<Successor>;

    /// Test whether `state` satisfies the goal. Defaults to "no dirt left".
    fn is_goal(&self, state: &WorldState) -> bool {
        state.is_clean()
    }
}

/// A grid is its own search world: the kernel successor generator over a
/// read-only map.
impl SearchWorld for Grid {
    fn successors(&self, state: &WorldState) -> Vec<Successor> {
        successors(self, state)
    }
}
