//! `WorldState`: robot position plus the cells still dirty.
//!
//! # Equality semantics
//!
//! `WorldState` carries exactly the fields that define state equivalence:
//! two states are the same search state iff their positions and dirty sets
//! match. Path cost, parent link and producing action belong to the search
//! node that wraps the state, so the derived `Eq`/`Ord`/`Hash` are safe to
//! use for explored-set deduplication.

use std::collections::BTreeSet;

use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};
use crate::world::grid::Position;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldState {
    position: Position,
    /// Sorted so that identity bytes and iteration are deterministic.
    dirty: BTreeSet<Position>,
}

impl WorldState {
    #[must_use]
    pub fn new(position: Position, dirty: BTreeSet<Position>) -> Self {
        Self { position, dirty }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn dirty(&self) -> &BTreeSet<Position> {
        &self.dirty
    }

    /// Goal test: no dirty cells remain.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Whether the robot stands on a dirty cell.
    #[must_use]
    pub fn on_dirt(&self) -> bool {
        self.dirty.contains(&self.position)
    }

    /// Same dirt, robot moved to `position`.
    #[must_use]
    pub fn moved_to(&self, position: Position) -> Self {
        Self {
            position,
            dirty: self.dirty.clone(),
        }
    }

    /// Same position, current cell cleaned. `None` if the cell is not dirty.
    #[must_use]
    pub fn vacuumed(&self) -> Option<Self> {
        if !self.on_dirt() {
            return None;
        }
        let mut dirty = self.dirty.clone();
        dirty.remove(&self.position);
        Some(Self {
            position: self.position,
            dirty,
        })
    }

    /// Identity bytes: `row, col, dirty_count` followed by each dirty
    /// `row, col`, all as little-endian `u64`, dirty cells in sorted order.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 * (3 + 2 * self.dirty.len()));
        out.extend_from_slice(&(self.position.row as u64).to_le_bytes());
        out.extend_from_slice(&(self.position.col as u64).to_le_bytes());
        out.extend_from_slice(&(self.dirty.len() as u64).to_le_bytes());
        for cell in &self.dirty {
            out.extend_from_slice(&(cell.row as u64).to_le_bytes());
            out.extend_from_slice(&(cell.col as u64).to_le_bytes());
        }
        out
    }

    /// Content hash of [`WorldState::identity_bytes`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::StateIdentity, &self.identity_bytes())
    }
}
