//! Brute-force breadth-first reference solver.
//!
//! Deliberately independent of the search crate: its own queue, its own
//! visited set, goal test at generation time. Only the kernel successor
//! generator is shared.

use std::collections::{HashSet, VecDeque};

use dustpan_kernel::world::action::Action;
use dustpan_kernel::world::grid::Grid;
use dustpan_kernel::world::state::WorldState;
use dustpan_kernel::world::successors::successors;

/// Length of the shortest cleaning plan, or `None` if the world is
/// unsolvable.
#[must_use]
pub fn shortest_plan_length(grid: &Grid, start: &WorldState) -> Option<usize> {
    if start.is_clean() {
        return Some(0);
    }
    let mut visited: HashSet<WorldState> = HashSet::from([start.clone()]);
    let mut queue: VecDeque<(WorldState, usize)> = VecDeque::from([(start.clone(), 0)]);

    while let Some((state, depth)) = queue.pop_front() {
        for successor in successors(grid, &state) {
            if successor.state.is_clean() {
                return Some(depth + 1);
            }
            if visited.insert(successor.state.clone()) {
                queue.push_back((successor.state, depth + 1));
            }
        }
    }
    None
}

/// Every state reachable from `start`, including `start`.
#[must_use]
pub fn reachable_states(grid: &Grid, start: &WorldState) -> HashSet<WorldState> {
    let mut visited: HashSet<WorldState> = HashSet::from([start.clone()]);
    let mut queue: VecDeque<WorldState> = VecDeque::from([start.clone()]);
    while let Some(state) = queue.pop_front() {
        for successor in successors(grid, &state) {
            if visited.insert(successor.state.clone()) {
                queue.push_back(successor.state);
            }
        }
    }
    visited
}

/// Parse a plan written as action letters (`"SV"`), or `None` if any
/// letter is not an action.
#[must_use]
pub fn parse_plan(letters: &str) -> Option<Vec<Action>> {
    letters.chars().map(Action::from_label).collect()
}
