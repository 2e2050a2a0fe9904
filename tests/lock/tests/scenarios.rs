//! Named end-to-end scenarios, loaded from the fixture files on disk.

use std::path::PathBuf;

use dustpan_harness::loader::load_world_file;
use dustpan_harness::report::render_text;
use dustpan_harness::runner::run_world;
use dustpan_kernel::world::action::Action;
use dustpan_search::outcome::TerminationReason;
use dustpan_search::policy::{SearchPolicy, Strategy};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[test]
fn corridor_uniform_cost_is_south_vacuum() {
    let loaded = load_world_file(&fixture("corridor.world")).unwrap();
    let report = run_world(&loaded.world, loaded.digest, &SearchPolicy::default()).unwrap();
    assert_eq!(report.path, vec![Action::South, Action::Vacuum]);
    assert!(report.stats.nodes_generated >= 2);
    assert!(report.stats.nodes_expanded >= 2);
    assert_eq!(render_text(&report), "S\nV\n6 nodes generated\n3 nodes expanded\n");
}

#[test]
fn no_dirt_returns_empty_plan_without_expanding() {
    let loaded = load_world_file(&fixture("no_dirt.world")).unwrap();
    for strategy in Strategy::ALL {
        let report =
            run_world(&loaded.world, loaded.digest.clone(), &SearchPolicy::new(strategy)).unwrap();
        assert!(report.path.is_empty());
        assert_eq!(report.stats.nodes_expanded, 0);
        assert!(report.is_goal_reached());
    }
}

#[test]
fn enclosed_robot_is_a_normal_outcome() {
    let loaded = load_world_file(&fixture("enclosed.world")).unwrap();
    for strategy in Strategy::ALL {
        let report =
            run_world(&loaded.world, loaded.digest.clone(), &SearchPolicy::new(strategy)).unwrap();
        assert!(report.path.is_empty());
        assert_eq!(report.termination, TerminationReason::FrontierExhausted);
        assert!(report.stats.nodes_generated >= 1);
        assert!(report.stats.nodes_expanded >= 1);
    }
}

#[test]
fn two_rooms_uniform_cost_is_no_longer_than_depth_first() {
    let loaded = load_world_file(&fixture("two_rooms.world")).unwrap();
    let ucs = run_world(&loaded.world, loaded.digest.clone(), &SearchPolicy::default()).unwrap();
    let dfs = run_world(
        &loaded.world,
        loaded.digest.clone(),
        &SearchPolicy::new(Strategy::DepthFirst),
    )
    .unwrap();
    assert!(ucs.is_goal_reached() && dfs.is_goal_reached());
    assert!(ucs.path.len() <= dfs.path.len());
    assert_eq!(ucs.path.iter().filter(|a| **a == Action::Vacuum).count(), 4);
}

#[test]
fn crlf_fixture_parses_like_lf() {
    let lf = load_world_file(&fixture("corridor.world")).unwrap();
    let crlf = load_world_file(&fixture("corridor_crlf.world")).unwrap();
    assert_eq!(lf.world, crlf.world);
    assert_ne!(lf.digest, crlf.digest);
}
