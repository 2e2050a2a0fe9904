//! Uniform-cost search returns minimum-length plans.
//!
//! The oracle is the brute-force BFS in `lock_tests::reference`, checked
//! against every world of a few tiny shapes plus the built-in worlds.

use dustpan_harness::worlds;
use dustpan_harness::worlds::regimes::all_regimes;
use dustpan_kernel::world::parse::parse_world;
use dustpan_kernel::world::replay::replay;
use dustpan_search::search::uniform_cost_search;
use lock_tests::reference::shortest_plan_length;
use lock_tests::world_builders::all_worlds;

fn check_world(text: &str) {
    let world = parse_world(text).unwrap();
    let expected = shortest_plan_length(&world.grid, &world.start);
    let result = uniform_cost_search(world.start.clone(), &world.grid);

    match expected {
        Some(len) => {
            assert!(result.is_goal_reached(), "no plan for solvable world:\n{text}");
            assert_eq!(result.path.len(), len, "non-minimal plan for:\n{text}");
            let end = replay(&world.grid, &world.start, &result.path).unwrap();
            assert!(end.is_clean(), "plan leaves dirt in:\n{text}");
        }
        None => {
            assert!(!result.is_goal_reached(), "plan for unsolvable world:\n{text}");
            assert!(result.path.is_empty());
        }
    }
}

#[test]
fn matches_brute_force_on_every_1x4_world() {
    for text in all_worlds(1, 4) {
        check_world(&text);
    }
}

#[test]
fn matches_brute_force_on_every_2x3_world() {
    for text in all_worlds(2, 3) {
        check_world(&text);
    }
}

#[test]
fn matches_brute_force_on_every_3x2_world() {
    for text in all_worlds(3, 2) {
        check_world(&text);
    }
}

#[test]
fn matches_brute_force_on_builtin_worlds() {
    for (_, text) in worlds::ALL {
        check_world(text);
    }
    for regime in all_regimes() {
        check_world(&regime.text);
    }
}

#[test]
fn goal_cost_equals_plan_length() {
    for (name, text) in worlds::ALL {
        let world = parse_world(text).unwrap();
        let result = uniform_cost_search(world.start, &world.grid);
        if let Some(goal) = result.goal_node() {
            assert_eq!(goal.cost, result.path.len() as u64, "{name}");
        }
    }
}
