//! Search determinism: identical inputs give identical plans, counters and
//! report bytes, in-process and across processes.

use std::path::Path;
use std::process::Command;

use dustpan_harness::loader::load_world_bytes;
use dustpan_harness::report::report_bytes;
use dustpan_harness::runner::run_world;
use dustpan_harness::worlds;
use dustpan_kernel::proof::hash::ContentHash;
use dustpan_kernel::world::parse::parse_world;
use dustpan_kernel::world::replay::replay;
use dustpan_search::policy::{SearchPolicy, Strategy};
use lock_tests::reference::parse_plan;

#[test]
fn search_determinism_inproc_n10() {
    for (name, text) in worlds::ALL {
        let loaded = load_world_bytes(text.as_bytes(), name).unwrap();
        for strategy in Strategy::ALL {
            let policy = SearchPolicy::new(strategy);
            let first = run_world(&loaded.world, loaded.digest.clone(), &policy).unwrap();
            let first_bytes = report_bytes(&first).unwrap();
            for _ in 1..10 {
                let again = run_world(&loaded.world, loaded.digest.clone(), &policy).unwrap();
                assert_eq!(again, first, "{name} {strategy}");
                assert_eq!(report_bytes(&again).unwrap(), first_bytes, "{name} {strategy}");
            }
        }
    }
}

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    run_fixture(work_dir, &[], env_overrides)
}

fn run_fixture(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command
        .args(args)
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(baseline.contains("corridor.uniform-cost=sha256:"));
    assert!(baseline.contains("goal_reached SV\n"));
    assert!(baseline.contains("enclosed.depth-first=sha256:"));
    assert!(baseline.contains("frontier_exhausted"));
    assert_eq!(baseline.lines().count(), worlds::ALL.len() * Strategy::ALL.len());

    let alt_cwd = std::env::temp_dir();
    let variant_cwd = run_variant(&alt_cwd.to_string_lossy(), &[]);
    assert_eq!(baseline, variant_cwd, "output differs when cwd changes");

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_noise = run_variant(
        &root,
        &[("RUST_LOG", "trace"), ("TZ", "America/New_York")],
    );
    assert_eq!(baseline, variant_noise, "output differs with logging enabled");
}

/// One fixture output line: `name.strategy=<digest> <termination> <path>`.
struct FixtureLine {
    world: String,
    digest: ContentHash,
    termination: String,
    path: String,
}

fn parse_line(line: &str) -> FixtureLine {
    let (key, rest) = line.split_once('=').expect("key=value line");
    let (world, _strategy) = key.split_once('.').expect("name.strategy key");
    let mut fields = rest.splitn(3, ' ');
    let digest = ContentHash::parse(fields.next().expect("digest field")).expect("valid digest");
    let termination = fields.next().expect("termination field").to_string();
    let path = fields.next().unwrap_or_default().to_string();
    FixtureLine {
        world: world.to_string(),
        digest,
        termination,
        path,
    }
}

#[test]
fn crossproc_plans_replay_in_process() {
    let output = run_variant(&workspace_root(), &[]);
    for line in output.lines().map(parse_line) {
        assert_eq!(line.digest.algorithm(), "sha256", "{}", line.world);
        assert_eq!(line.digest.hex_digest().len(), 64, "{}", line.world);

        let text = worlds::by_name(&line.world).expect("fixture names built-in worlds");
        let world = parse_world(text).unwrap();
        let plan = parse_plan(&line.path).expect("plan letters are actions");
        let end = replay(&world.grid, &world.start, &plan).unwrap();
        assert_eq!(
            end.is_clean(),
            line.termination == "goal_reached",
            "{}: {}",
            line.world,
            line.path
        );
    }
}

#[test]
fn crossproc_named_worlds_match_full_run() {
    let root = workspace_root();
    let full = run_variant(&root, &[]);
    let subset = run_fixture(&root, &["maze", "corridor"], &[]);

    assert_eq!(subset.lines().count(), 2 * Strategy::ALL.len());
    for line in subset.lines() {
        assert!(full.lines().any(|l| l == line), "{line} missing from full run");
    }
    assert!(subset.starts_with("maze."));
}
