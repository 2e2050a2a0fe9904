//! Generated world regimes with matched policies and expectations.
//!
//! Each constructor returns a [`Regime`]: the world text, the policy to run
//! it under and what a correct search must observe. Tests and benches should
//! go through these constructors so world shape and policy never drift apart.

use std::collections::BTreeSet;

use dustpan_kernel::world::error::WorldParseError;
use dustpan_kernel::world::grid::{Position, DIRTY_MARKER, EMPTY_MARKER, ROBOT_MARKER, WALL_MARKER};
use dustpan_kernel::world::parse::{parse_world, ParsedWorld};
use dustpan_search::policy::{SearchPolicy, Strategy};

/// Test-side expectations for a regime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeExpectations {
    /// Whether the search should reach a goal.
    pub expects_goal_reached: bool,
    /// Length of the shortest plan, when known in closed form.
    pub shortest_path_length: Option<usize>,
    /// Minimum `duplicates_skipped` under uniform-cost search.
    pub min_duplicates_skipped: u64,
    /// Minimum `frontier_high_water`.
    pub min_frontier_high_water: u64,
}

/// A matched `(world, policy, expectations)` triple.
#[derive(Debug, Clone)]
pub struct Regime {
    pub name: &'static str,
    /// Complete world-file text.
    pub text: String,
    pub policy: SearchPolicy,
    pub expectations: RegimeExpectations,
}

impl Regime {
    /// Parse the regime's world text.
    ///
    /// # Errors
    ///
    /// Returns [`WorldParseError`] if the generated text is not a valid world.
    pub fn world(&self) -> Result<ParsedWorld, WorldParseError> {
        parse_world(&self.text)
    }

    /// The same regime under a different strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.policy.strategy = strategy;
        self
    }
}

/// Layout of a rectangular world to be rendered as world-file text.
#[derive(Debug, Clone)]
pub struct WorldLayout {
    pub rows: usize,
    pub cols: usize,
    pub robot: Position,
    pub walls: BTreeSet<Position>,
    pub dirt: BTreeSet<Position>,
}

impl WorldLayout {
    /// An empty room with the robot at `robot`.
    #[must_use]
    pub fn room(rows: usize, cols: usize, robot: Position) -> Self {
        Self {
            rows,
            cols,
            robot,
            walls: BTreeSet::new(),
            dirt: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_dirt(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.dirt.extend(cells);
        self
    }

    #[must_use]
    pub fn with_walls(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.walls.extend(cells);
        self
    }

    /// Render as world-file text. A robot cell that is also dirty is
    /// rendered as the robot, so that dirt is dropped.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}\n", self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                let marker = if pos == self.robot {
                    ROBOT_MARKER
                } else if self.walls.contains(&pos) {
                    WALL_MARKER
                } else if self.dirt.contains(&pos) {
                    DIRTY_MARKER
                } else {
                    EMPTY_MARKER
                };
                out.push(marker);
            }
            out.push('\n');
        }
        out
    }
}

fn explicit_policy(strategy: Strategy, max_expansions: Option<u64>) -> SearchPolicy {
    SearchPolicy {
        strategy,
        max_expansions,
    }
}

/// **Corridor** regime: one row of `len` cells, robot at the west end,
/// dirt at the east end. Shortest plan is `len - 1` moves plus a vacuum.
///
/// `len` is clamped to at least 2.
#[must_use]
pub fn regime_corridor(len: usize) -> Regime {
    let len = len.max(2);
    let layout =
        WorldLayout::room(1, len, Position::new(0, 0)).with_dirt([Position::new(0, len - 1)]);
    Regime {
        name: "corridor",
        text: layout.render(),
        policy: explicit_policy(Strategy::UniformCost, None),
        expectations: RegimeExpectations {
            expects_goal_reached: true,
            shortest_path_length: Some(len),
            min_duplicates_skipped: u64::from(len >= 3),
            min_frontier_high_water: 1,
        },
    }
}

/// **Open room** regime: `n × n` room, robot in the north-west corner, one
/// dirty cell in the south-east corner. Shortest plan is `2(n - 1) + 1`.
///
/// `n` is clamped to at least 2.
#[must_use]
pub fn regime_open_room(n: usize) -> Regime {
    let n = n.max(2);
    let layout =
        WorldLayout::room(n, n, Position::new(0, 0)).with_dirt([Position::new(n - 1, n - 1)]);
    Regime {
        name: "open_room",
        text: layout.render(),
        policy: explicit_policy(Strategy::UniformCost, None),
        expectations: RegimeExpectations {
            expects_goal_reached: true,
            shortest_path_length: Some(2 * (n - 1) + 1),
            min_duplicates_skipped: 1,
            min_frontier_high_water: 2,
        },
    }
}

/// **Four corners** regime: `n × n` room, robot in the centre, dirt in all
/// four corners. Sixteen dirt subsets per position keep the state space
/// large enough to stress the explored set.
///
/// `n` is clamped to at least 3.
#[must_use]
pub fn regime_four_corners(n: usize) -> Regime {
    let n = n.max(3);
    let last = n - 1;
    let layout = WorldLayout::room(n, n, Position::new(n / 2, n / 2)).with_dirt([
        Position::new(0, 0),
        Position::new(0, last),
        Position::new(last, 0),
        Position::new(last, last),
    ]);
    Regime {
        name: "four_corners",
        text: layout.render(),
        policy: explicit_policy(Strategy::UniformCost, None),
        expectations: RegimeExpectations {
            expects_goal_reached: true,
            shortest_path_length: None,
            min_duplicates_skipped: 1,
            min_frontier_high_water: 2,
        },
    }
}

/// **Walled off** regime: the robot sits in a sealed 1×1 cell, dirt lies
/// outside. The frontier exhausts after one expansion.
#[must_use]
pub fn regime_walled_off() -> Regime {
    let layout = WorldLayout::room(3, 5, Position::new(1, 1))
        .with_walls([
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ])
        .with_dirt([Position::new(0, 4), Position::new(2, 4)]);
    Regime {
        name: "walled_off",
        text: layout.render(),
        policy: explicit_policy(Strategy::UniformCost, None),
        expectations: RegimeExpectations {
            expects_goal_reached: false,
            shortest_path_length: None,
            min_duplicates_skipped: 0,
            min_frontier_high_water: 1,
        },
    }
}

/// **Budget-limited** regime: a 6×6 open room capped at three expansions,
/// far fewer than the eleven-step plan needs.
#[must_use]
pub fn regime_budget_limited() -> Regime {
    let mut regime = regime_open_room(6);
    regime.name = "budget_limited";
    regime.policy.max_expansions = Some(3);
    regime.expectations = RegimeExpectations {
        expects_goal_reached: false,
        shortest_path_length: Some(11),
        min_duplicates_skipped: 0,
        min_frontier_high_water: 2,
    };
    regime
}

/// All regimes at their default sizes.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_corridor(8),
        regime_open_room(5),
        regime_four_corners(5),
        regime_walled_off(),
        regime_budget_limited(),
    ]
}
