//! Search policy types.

use std::str::FromStr;

use crate::error::SearchError;

/// Which frontier ordering drives the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Cost-ordered frontier. Returns a minimum-length plan.
    #[default]
    UniformCost,
    /// LIFO frontier. Returns some plan, not necessarily the shortest.
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Self::UniformCost, Self::DepthFirst];

    /// The command-line name of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UniformCost => "uniform-cost",
            Self::DepthFirst => "depth-first",
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Case-insensitive match on [`Strategy::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnsupportedAlgorithm { name: s.to_string() })
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    /// Hard cap on node expansions. `None` runs until goal or exhaustion.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_expansions: None,
        }
    }

    /// Canonical JSON projection of the policy for reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.strategy.as_str(),
            "max_expansions": self.max_expansions,
        })
    }
}
