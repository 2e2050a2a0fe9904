//! Typed world-loading errors.
//!
//! `WorldParseError` covers everything that can go wrong between raw world
//! text and a validated `Grid` plus start state. Searches never produce it.

/// Typed failure for world parsing and grid construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldParseError {
    /// The text does not describe a well-formed world: a header line is not
    /// an integer, the declared dimensions disagree with the rows present,
    /// a row holds an illegal character, or more than one robot is placed.
    MalformedWorld { detail: String },
    /// No robot marker appears anywhere in the grid.
    NoRobot,
}

impl WorldParseError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedWorld {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for WorldParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedWorld { detail } => write!(f, "malformed world: {detail}"),
            Self::NoRobot => write!(f, "no robot marker '@' found in world"),
        }
    }
}

impl std::error::Error for WorldParseError {}
