//! Successor generation: the single transition function of the world.

use crate::world::action::Action;
use crate::world::grid::Grid;
use crate::world::state::WorldState;

/// One legal transition out of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub action: Action,
    pub state: WorldState,
}

/// Enumerate the legal successors of `state`.
///
/// Moves come first in canonical order (North, South, East, West), each
/// present iff the destination is inside the grid and not a wall. Vacuum is
/// appended last iff the robot stands on a dirty cell. The input state is
/// never modified.
#[must_use]
pub fn successors(grid: &Grid, state: &WorldState) -> Vec<Successor> {
    let mut out = Vec::with_capacity(Action::ALL.len());
    for action in Action::MOVES {
        if let Some(dest) = grid.step(state.position(), action) {
            out.push(Successor {
                action,
                state: state.moved_to(dest),
            });
        }
    }
    if let Some(cleaned) = state.vacuumed() {
        out.push(Successor {
            action: Action::Vacuum,
            state: cleaned,
        });
    }
    out
}
