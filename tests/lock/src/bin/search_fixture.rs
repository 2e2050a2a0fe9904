//! Binary that plans built-in worlds under both strategies and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [world-name ...]` (all built-in worlds if none)
//!
//! Output: one `name.strategy=<report digest> <termination> <path>` line
//! per run.

use dustpan_harness::loader::load_world_bytes;
use dustpan_harness::report::report_digest;
use dustpan_harness::runner::run_world;
use dustpan_harness::worlds;
use dustpan_search::policy::{SearchPolicy, Strategy};

fn main() {
    let requested: Vec<String> = std::env::args().skip(1).collect();
    let selected: Vec<(String, &str)> = if requested.is_empty() {
        worlds::ALL
            .iter()
            .map(|(name, text)| ((*name).to_string(), *text))
            .collect()
    } else {
        requested
            .into_iter()
            .map(|name| {
                let text = worlds::by_name(&name)
                    .unwrap_or_else(|| panic!("unknown built-in world {name:?}"));
                (name, text)
            })
            .collect()
    };

    for (name, text) in &selected {
        let loaded = load_world_bytes(text.as_bytes(), name).expect("built-in world loads");
        for strategy in Strategy::ALL {
            let report = run_world(&loaded.world, loaded.digest.clone(), &SearchPolicy::new(strategy))
                .expect("run failed");
            let digest = report_digest(&report).expect("report digest");
            let path: String = report.path.iter().map(ToString::to_string).collect();
            println!(
                "{name}.{strategy}={} {} {path}",
                digest.as_str(),
                report.termination.tag()
            );
        }
    }
}
