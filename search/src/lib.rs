//! Dustpan Search: uninformed state-space search over cleaning worlds.
//!
//! This crate provides the search layer. It depends only on `dustpan_kernel`;
//! it does NOT depend on `dustpan_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! dustpan_kernel  ←  dustpan_search  ←  dustpan_harness
//! (world model)      (frontier, nodes)   (loading, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): arena node holding state, parent link, action and cost
//! - [`Frontier`](frontier::Frontier): frontier ordering contract, with
//!   [`CostOrderedFrontier`](frontier::CostOrderedFrontier) and
//!   [`LifoFrontier`](frontier::LifoFrontier)
//! - [`SearchPolicy`](policy::SearchPolicy): strategy selection and expansion budget
//! - [`SearchWorld`](contract::SearchWorld): trait for worlds that support search
//! - [`SearchResult`](search::SearchResult): path, counters and termination reason

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod outcome;
pub mod policy;
pub mod search;
