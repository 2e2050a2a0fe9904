//! World module: grid, actions, states, successor generation and parsing.
//!
//! Depends on `proof` for state fingerprints only.

pub mod action;
pub mod error;
pub mod grid;
pub mod parse;
pub mod replay;
pub mod state;
pub mod successors;
