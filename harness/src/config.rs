//! Planner configuration from command-line arguments.
//!
//! ```text
//! planner [--json] [--max-expansions <n>] <algorithm> <world-file>
//! ```
//!
//! Flags may appear anywhere. Exactly two positional arguments are
//! required. The algorithm is validated here, before any file is touched.

use std::path::PathBuf;

use dustpan_search::error::SearchError;
use dustpan_search::policy::{SearchPolicy, Strategy};

/// One-line usage string printed on argument errors.
pub const USAGE: &str =
    "Usage: planner [--json] [--max-expansions <n>] <uniform-cost|depth-first> <world-file>";

/// How the plan is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One action letter per line, then the two counter lines.
    #[default]
    Text,
    /// A single canonical JSON object.
    Json,
}

/// Fully validated planner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub policy: SearchPolicy,
    pub world_path: PathBuf,
    pub output: OutputFormat,
}

/// Error building a [`PlannerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Wrong number of positionals, unknown flag, or a flag missing its value.
    Usage { detail: String },
    /// The algorithm name is not supported.
    UnsupportedAlgorithm(SearchError),
    /// `--max-expansions` value is not a non-negative integer.
    InvalidBudget { raw: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage { detail } => write!(f, "{detail}"),
            Self::UnsupportedAlgorithm(e) => write!(f, "{e}"),
            Self::InvalidBudget { raw } => {
                write!(f, "--max-expansions expects a non-negative integer, got {raw:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl PlannerConfig {
    /// Build a configuration from the arguments after the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed arguments or an unsupported
    /// algorithm name.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut output = OutputFormat::Text;
        let mut max_expansions = None;
        let mut positionals: Vec<String> = Vec::new();

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => output = OutputFormat::Json,
                "--max-expansions" => {
                    let raw = args.next().ok_or_else(|| ConfigError::Usage {
                        detail: "--max-expansions requires a value".into(),
                    })?;
                    let budget = raw
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidBudget { raw: raw.clone() })?;
                    max_expansions = Some(budget);
                }
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::Usage {
                        detail: format!("unknown option {flag:?}"),
                    });
                }
                _ => positionals.push(arg),
            }
        }

        let [algorithm, world_path]: [String; 2] =
            positionals.try_into().map_err(|found: Vec<String>| ConfigError::Usage {
                detail: format!("expected 2 arguments, got {}", found.len()),
            })?;

        let strategy = algorithm
            .parse::<Strategy>()
            .map_err(ConfigError::UnsupportedAlgorithm)?;

        Ok(Self {
            policy: SearchPolicy {
                strategy,
                max_expansions,
            },
            world_path: PathBuf::from(world_path),
            output,
        })
    }
}
