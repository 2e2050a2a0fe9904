//! Search entry points and the shared expansion loop.
//!
//! # Loop
//!
//! ```text
//! pop → goal? stop : explored? skip : budget? stop : mark explored
//!     → expand (successors in canonical order) → push_successors
//! ```
//!
//! The goal test and the explored-set check both happen when a node is
//! popped, never when it is pushed. Only the frontier ordering differs
//! between strategies.

use std::collections::BTreeSet;

use dustpan_kernel::world::action::Action;
use dustpan_kernel::world::state::WorldState;
use log::{debug, trace};

use crate::contract::SearchWorld;
use crate::frontier::{CostOrderedFrontier, Frontier, LifoFrontier};
use crate::node::SearchNode;
use crate::outcome::{SearchStats, TerminationReason};
use crate::policy::{SearchPolicy, Strategy};

/// Expansion interval between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Result of a search execution.
///
/// An unsolvable world is not an error: it yields an empty `path` with
/// [`TerminationReason::FrontierExhausted`].
#[derive(Debug)]
pub struct SearchResult {
    /// Actions from the start state to the goal, first action first.
    /// Empty if no goal was reached or the start is already clean.
    pub path: Vec<Action>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNode>,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal_node(&self) -> Option<&SearchNode> {
        match self.termination {
            TerminationReason::GoalReached { node_id } => self.nodes.get(node_id),
            _ => None,
        }
    }
}

/// Run the strategy selected by `policy` from `root`.
pub fn search(root: WorldState, world: &dyn SearchWorld, policy: &SearchPolicy) -> SearchResult {
    match policy.strategy {
        Strategy::UniformCost => run(root, world, policy, CostOrderedFrontier::new()),
        Strategy::DepthFirst => run(root, world, policy, LifoFrontier::new()),
    }
}

/// Uniform-cost search without an expansion budget.
///
/// Every action costs 1, so the returned path has minimum length.
pub fn uniform_cost_search(root: WorldState, world: &dyn SearchWorld) -> SearchResult {
    search(root, world, &SearchPolicy::new(Strategy::UniformCost))
}

/// Depth-first search without an expansion budget.
pub fn depth_first_search(root: WorldState, world: &dyn SearchWorld) -> SearchResult {
    search(root, world, &SearchPolicy::new(Strategy::DepthFirst))
}

fn run<F: Frontier>(
    root: WorldState,
    world: &dyn SearchWorld,
    policy: &SearchPolicy,
    mut frontier: F,
) -> SearchResult {
    debug!(
        "search start: strategy={} root={} dirty={} max_expansions={:?}",
        policy.strategy,
        root.position(),
        root.dirty().len(),
        policy.max_expansions
    );

    let root_node = SearchNode::root(root);
    frontier.push(root_node.frontier_key());
    let mut nodes = vec![root_node];
    let mut explored: BTreeSet<WorldState> = BTreeSet::new();
    let mut stats = SearchStats {
        nodes_generated: 1,
        ..SearchStats::default()
    };

    let termination = loop {
        let Some(current_id) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        let current = &nodes[current_id];

        if world.is_goal(&current.state) {
            break TerminationReason::GoalReached {
                node_id: current_id,
            };
        }

        if explored.contains(&current.state) {
            stats.duplicates_skipped += 1;
            continue;
        }

        if policy
            .max_expansions
            .is_some_and(|max| stats.nodes_expanded >= max)
        {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let state = current.state.clone();
        let child_cost = current.cost + 1;
        trace!(
            "expand node={current_id} cost={} pos={} dirty={}",
            current.cost,
            state.position(),
            state.dirty().len()
        );

        let successors = world.successors(&state);
        explored.insert(state);
        stats.nodes_expanded += 1;

        let mut keys = Vec::with_capacity(successors.len());
        for successor in successors {
            let child = SearchNode {
                node_id: nodes.len(),
                parent_id: Some(current_id),
                state: successor.state,
                cost: child_cost,
                producing_action: Some(successor.action),
            };
            keys.push(child.frontier_key());
            nodes.push(child);
        }
        stats.nodes_generated += keys.len() as u64;
        frontier.push_successors(keys);

        if stats.nodes_expanded % PROGRESS_INTERVAL == 0 {
            debug!(
                "progress: expanded={} generated={} frontier={}",
                stats.nodes_expanded,
                stats.nodes_generated,
                frontier.len()
            );
        }
    };

    stats.frontier_high_water = frontier.high_water();
    let path = match termination {
        TerminationReason::GoalReached { node_id } => reconstruct_path(&nodes, node_id),
        TerminationReason::FrontierExhausted | TerminationReason::ExpansionBudgetExceeded => {
            Vec::new()
        }
    };

    debug!(
        "search end: strategy={} termination={} path_len={} generated={} expanded={}",
        policy.strategy,
        termination.tag(),
        path.len(),
        stats.nodes_generated,
        stats.nodes_expanded
    );

    SearchResult {
        path,
        stats,
        termination,
        nodes,
    }
}

/// Walk parent links from `goal_id` back to the root and return the
/// producing actions in execution order.
///
/// Stops at the first node without a parent (the root). An id outside the
/// arena yields an empty path.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNode], goal_id: usize) -> Vec<Action> {
    let mut path = Vec::new();
    let mut cursor = nodes.get(goal_id);
    while let Some(node) = cursor {
        let Some(parent_id) = node.parent_id else {
            break;
        };
        if let Some(action) = node.producing_action {
            path.push(action);
        }
        cursor = nodes.get(parent_id);
    }
    path.reverse();
    path
}
