//! `planner`: find a cleaning plan for a grid world.
//!
//! ```text
//! planner [--json] [--max-expansions <n>] <uniform-cost|depth-first> <world-file>
//! ```
//!
//! Prints the plan and counters on stdout and exits 0, including when the
//! world is unsolvable. Argument, file and parse errors go to stderr with a
//! non-zero exit status. Log verbosity follows `RUST_LOG` (default `warn`).

use std::io::Write;
use std::process::ExitCode;

use dustpan_harness::config::{ConfigError, USAGE};
use dustpan_harness::runner::{execute, RunError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    match execute(std::env::args().skip(1)) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(
                e,
                RunError::Config(ConfigError::Usage { .. } | ConfigError::InvalidBudget { .. })
            ) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}
