//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal, exhaustion, budget) are expressed via
//! [`crate::outcome::TerminationReason`]; a search itself never fails.

/// Typed failure for pre-flight search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The algorithm name is not one of the supported strategies.
    UnsupportedAlgorithm { name: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedAlgorithm { name } => write!(
                f,
                "unsupported algorithm {name:?}: expected 'uniform-cost' or 'depth-first'"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
