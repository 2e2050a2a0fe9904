//! World-file parsing.
//!
//! # Format
//!
//! ```text
//! <cols>
//! <rows>
//! <row 0: exactly cols characters>
//! ...
//! <row rows-1>
//! ```
//!
//! Header lines are trimmed before being parsed as integers. Grid rows keep
//! every character except the line terminator, so a literal space is a
//! valid empty cell. Lines after the last grid row are ignored.

use std::collections::BTreeSet;

use crate::world::error::WorldParseError;
use crate::world::grid::{Grid, Position, DIRTY_MARKER, ROBOT_MARKER};
use crate::world::state::WorldState;

/// A parsed world: the shared grid and the initial search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWorld {
    pub grid: Grid,
    pub start: WorldState,
}

/// Parse world-file text.
///
/// # Errors
///
/// - [`WorldParseError::MalformedWorld`] if a header line is missing or not a
///   non-negative integer, the grid disagrees with the declared dimensions,
///   a row contains an illegal character, or more than one robot is placed.
/// - [`WorldParseError::NoRobot`] if the grid has no robot marker.
pub fn parse_world(text: &str) -> Result<ParsedWorld, WorldParseError> {
    let mut lines = text.lines();
    let cols = parse_dimension(lines.next(), "column count")?;
    let rows = parse_dimension(lines.next(), "row count")?;
    let raw_rows: Vec<&str> = lines.take(rows).collect();

    let grid = Grid::load(rows, cols, &raw_rows)?;

    let mut robot: Option<Position> = None;
    let mut dirty = BTreeSet::new();
    for (row, line) in raw_rows.iter().enumerate() {
        for (col, marker) in line.chars().enumerate() {
            let pos = Position::new(row, col);
            match marker {
                ROBOT_MARKER => {
                    if let Some(first) = robot {
                        return Err(WorldParseError::malformed(format!(
                            "multiple robot markers at {first} and {pos}"
                        )));
                    }
                    robot = Some(pos);
                }
                DIRTY_MARKER => {
                    dirty.insert(pos);
                }
                _ => {}
            }
        }
    }

    let position = robot.ok_or(WorldParseError::NoRobot)?;
    Ok(ParsedWorld {
        grid,
        start: WorldState::new(position, dirty),
    })
}

fn parse_dimension(line: Option<&str>, what: &str) -> Result<usize, WorldParseError> {
    let raw = line.ok_or_else(|| WorldParseError::malformed(format!("missing {what}")))?;
    raw.trim().parse::<usize>().map_err(|e| {
        WorldParseError::malformed(format!("{what} {:?} is not a valid integer: {e}", raw.trim()))
    })
}
