//! Harness runner: load a world, search it, verify the plan, report.
//!
//! # Pipeline
//!
//! ```text
//! PlannerConfig → load_world_file() → search() → replay() → PlanReport
//!   → render_text() | render_json()
//! ```
//!
//! The runner only orchestrates kernel and search APIs. An unsolvable world
//! produces a report with an empty path, never an error.

use std::time::Instant;

use dustpan_kernel::proof::hash::ContentHash;
use dustpan_kernel::world::action::Action;
use dustpan_kernel::world::parse::ParsedWorld;
use dustpan_kernel::world::replay::replay;
use dustpan_search::outcome::{SearchStats, TerminationReason};
use dustpan_search::policy::SearchPolicy;
use dustpan_search::search::search;
use log::info;

use crate::config::{ConfigError, OutputFormat, PlannerConfig};
use crate::loader::{load_world_file, LoadError, LoadedWorld};
use crate::report::{render_json, render_text};

/// Error during a planner run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Command-line arguments were rejected.
    Config(ConfigError),
    /// The world file could not be loaded.
    Load(LoadError),
    /// The returned plan does not clean the world when replayed.
    ReplayDivergence { detail: String },
    /// Canonical JSON serialization failed.
    Canon { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Load(e) => write!(f, "{e}"),
            Self::ReplayDivergence { detail } => write!(f, "plan replay diverged: {detail}"),
            Self::Canon { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

/// Everything a planner run produces, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub policy: SearchPolicy,
    /// Digest of the world file bytes.
    pub world_digest: ContentHash,
    /// Fingerprint of the start state.
    pub root_fingerprint: ContentHash,
    /// Actions in execution order. Empty if no goal was reached.
    pub path: Vec<Action>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
}

impl PlanReport {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }
}

/// Search `world` under `policy` and verify any plan found by replay.
///
/// # Errors
///
/// Returns [`RunError::ReplayDivergence`] if the search returns a plan that
/// is illegal or leaves dirt behind.
pub fn run_world(
    world: &ParsedWorld,
    world_digest: ContentHash,
    policy: &SearchPolicy,
) -> Result<PlanReport, RunError> {
    let started = Instant::now();
    let result = search(world.start.clone(), &world.grid, policy);
    let elapsed = started.elapsed();

    if result.is_goal_reached() {
        verify_plan(world, &result.path)?;
    }

    info!(
        "{}: {} in {:.3}s, path_len={} generated={} expanded={} duplicates={} frontier_high_water={}",
        policy.strategy,
        result.termination.tag(),
        elapsed.as_secs_f64(),
        result.path.len(),
        result.stats.nodes_generated,
        result.stats.nodes_expanded,
        result.stats.duplicates_skipped,
        result.stats.frontier_high_water
    );

    Ok(PlanReport {
        policy: policy.clone(),
        world_digest,
        root_fingerprint: world.start.fingerprint(),
        path: result.path,
        stats: result.stats,
        termination: result.termination,
    })
}

/// Replay `path` from the start state and require a clean final state.
///
/// # Errors
///
/// Returns [`RunError::ReplayDivergence`] on an illegal action or leftover dirt.
pub fn verify_plan(world: &ParsedWorld, path: &[Action]) -> Result<(), RunError> {
    let end = replay(&world.grid, &world.start, path).map_err(|e| RunError::ReplayDivergence {
        detail: e.to_string(),
    })?;
    if end.is_clean() {
        Ok(())
    } else {
        Err(RunError::ReplayDivergence {
            detail: format!("{} dirty cells remain after replay", end.dirty().len()),
        })
    }
}

/// Load the configured world and run it.
///
/// # Errors
///
/// Returns [`RunError::Load`] if the world cannot be loaded, or any error
/// from [`run_world`].
pub fn run(config: &PlannerConfig) -> Result<PlanReport, RunError> {
    let LoadedWorld { world, digest, .. } = load_world_file(&config.world_path)?;
    run_world(&world, digest, &config.policy)
}

/// Parse arguments, run, and render the report as stdout text.
///
/// # Errors
///
/// Returns [`RunError`] for argument, load, replay or serialization failures.
pub fn execute<I, S>(args: I) -> Result<String, RunError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = PlannerConfig::from_args(args)?;
    let report = run(&config)?;
    match config.output {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => render_json(&report).map_err(|e| RunError::Canon {
            detail: e.to_string(),
        }),
    }
}
