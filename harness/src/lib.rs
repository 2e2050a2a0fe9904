//! Dustpan harness: everything between the command line and the search.
//!
//! The harness loads world files, builds a [`config::PlannerConfig`] from
//! arguments, runs the configured search through [`runner`], and renders
//! the outcome with [`report`]. It implements no search logic itself.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod loader;
pub mod report;
pub mod runner;
pub mod worlds;
