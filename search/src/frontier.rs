//! Frontier orderings: cost-ordered (uniform-cost) and LIFO (depth-first).
//!
//! A frontier stores arena indices only. Nodes themselves stay in the search
//! arena, so pushing and popping never moves a state.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;

/// Ordering contract shared by every search strategy.
///
/// The search loop hands each expansion's children to
/// [`Frontier::push_successors`] in canonical successor order and asks
/// [`Frontier::pop`] for the next node to examine; everything else about
/// the loop is strategy-independent.
pub trait Frontier {
    /// Schedule one node.
    fn push(&mut self, key: FrontierKey);

    /// Remove and return the arena index of the next node to examine.
    fn pop(&mut self) -> Option<usize>;

    /// Current number of scheduled nodes.
    fn len(&self) -> usize;

    /// Largest `len()` observed so far.
    fn high_water(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Schedule the children of one expansion, given in canonical order.
    fn push_successors(&mut self, keys: Vec<FrontierKey>) {
        for key in keys {
            self.push(key);
        }
    }
}

/// Min-heap on `(cost, node_id)`.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest cost first. Equal costs pop in creation order.
#[derive(Debug, Default)]
pub struct CostOrderedFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    high_water: u64,
}

impl CostOrderedFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for CostOrderedFrontier {
    fn push(&mut self, key: FrontierKey) {
        self.heap.push(Reverse(key));
        self.high_water = self.high_water.max(self.heap.len() as u64);
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(key)| key.node_id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// Stack frontier for depth-first search.
///
/// Children are pushed in reverse canonical order so that the first
/// canonical child sits on top of the stack and is examined first.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<usize>,
    high_water: u64,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, key: FrontierKey) {
        self.stack.push(key.node_id);
        self.high_water = self.high_water.max(self.stack.len() as u64);
    }

    fn pop(&mut self) -> Option<usize> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water
    }

    fn push_successors(&mut self, keys: Vec<FrontierKey>) {
        for key in keys.into_iter().rev() {
            self.push(key);
        }
    }
}
