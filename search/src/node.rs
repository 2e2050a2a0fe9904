//! Arena search nodes and the frontier ordering key.

use dustpan_kernel::world::action::Action;
use dustpan_kernel::world::state::WorldState;

/// A node in the search tree.
///
/// Nodes live in a per-search arena (`Vec<SearchNode>`) and are referred to
/// by index. `node_id` equals that index and also serves as the creation
/// counter: a node created later always has a larger id.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena index, assigned in creation order. The root is 0.
    pub node_id: usize,
    /// Parent arena index (`None` for the root).
    pub parent_id: Option<usize>,
    pub state: WorldState,
    /// Path length from the root (+1 per generated successor).
    pub cost: u64,
    /// The action that produced this node from its parent.
    pub producing_action: Option<Action>,
}

impl SearchNode {
    /// The root node of a search.
    #[must_use]
    pub fn root(state: WorldState) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            state,
            cost: 0,
            producing_action: None,
        }
    }

    /// The frontier key under which this node is scheduled.
    #[must_use]
    pub fn frontier_key(&self) -> FrontierKey {
        FrontierKey {
            cost: self.cost,
            node_id: self.node_id,
        }
    }
}

/// The frontier ordering key: `(cost, node_id)`.
///
/// Lower cost first; equal costs pop in creation order (FIFO).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub cost: u64,
    pub node_id: usize,
}
