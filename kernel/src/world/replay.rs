//! `replay()`: re-apply an action sequence through the successor generator.
//!
//! Replay is the independent check on a returned plan: it does not trust the
//! search arena, it re-derives every state from the start.

use crate::world::action::Action;
use crate::world::grid::{Grid, Position};
use crate::world::state::WorldState;
use crate::world::successors::successors;

/// An action in the sequence was not legal when it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    IllegalAction {
        /// Zero-based index into the action sequence.
        step: usize,
        action: Action,
        position: Position,
    },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalAction {
                step,
                action,
                position,
            } => write!(f, "step {step}: action {action} is not legal at {position}"),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Apply `actions` in order from `start` and return the final state.
///
/// # Errors
///
/// Returns [`ReplayError::IllegalAction`] at the first action that is not
/// among the legal successors of the state it is applied to.
pub fn replay(grid: &Grid, start: &WorldState, actions: &[Action]) -> Result<WorldState, ReplayError> {
    let mut current = start.clone();
    for (step, &action) in actions.iter().enumerate() {
        let next = successors(grid, &current)
            .into_iter()
            .find(|s| s.action == action)
            .ok_or(ReplayError::IllegalAction {
                step,
                action,
                position: current.position(),
            })?;
        current = next.state;
    }
    Ok(current)
}
