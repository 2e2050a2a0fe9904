//! Search counters and termination reasons.

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal node was popped.
    GoalReached { node_id: usize },
    /// The frontier emptied without a goal. The world is unsolvable.
    FrontierExhausted,
    /// `max_expansions` was hit before a goal was popped.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag used in reports and logs.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::GoalReached { node_id } => serde_json::json!({
                "type": self.tag(),
                "node_id": node_id,
            }),
            Self::FrontierExhausted | Self::ExpansionBudgetExceeded => {
                serde_json::json!({ "type": self.tag() })
            }
        }
    }
}

/// Counters accumulated by one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes created: the root plus one per pushed successor.
    pub nodes_generated: u64,
    /// Nodes whose successors were generated.
    pub nodes_expanded: u64,
    /// Popped nodes discarded because their state was already explored.
    pub duplicates_skipped: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

impl SearchStats {
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "nodes_generated": self.nodes_generated,
            "nodes_expanded": self.nodes_expanded,
            "duplicates_skipped": self.duplicates_skipped,
            "frontier_high_water": self.frontier_high_water,
        })
    }
}
