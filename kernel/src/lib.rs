//! Dustpan Kernel: the world model of the cleaning-robot planner.
//!
//! # API Surface
//!
//! - [`world::parse::parse_world`] -- parse a world description into a `Grid` and start state
//! - [`world::successors::successors`] -- enumerate the legal `(Action, WorldState)` pairs of a state
//! - [`world::replay::replay`] -- re-apply an action sequence and return the state it reaches
//!
//! # Module Dependency Direction
//!
//! `proof` ← `world`
//!
//! One-way only. `world` hashes through `proof`; `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
pub mod world;
