//! `Grid`: the immutable cell map shared by every state of a search.
//!
//! A grid is built once by [`Grid::load`] and never mutated afterwards.
//! States refer to it by shared reference only; they carry the robot
//! position and the dirty set, not the map.

use crate::world::action::Action;
use crate::world::error::WorldParseError;

/// Wall marker in world files.
pub const WALL_MARKER: char = '#';
/// Empty-cell marker in world files.
pub const EMPTY_MARKER: char = '_';
/// Alternative empty-cell marker (a literal space).
pub const SPACE_MARKER: char = ' ';
/// Robot start marker. The cell underneath is empty floor.
pub const ROBOT_MARKER: char = '@';
/// Dirty-cell marker. The cell underneath is empty floor.
pub const DIRTY_MARKER: char = '*';

/// A `(row, col)` coordinate. Row 0 is the first grid line of the world file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Static kind of a grid cell. Dirt and the robot are state, not cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
}

impl Cell {
    /// Classify a world-file character.
    ///
    /// `#` is a wall. Space and every visible ASCII character (including the
    /// `_`, `@` and `*` markers) are passable floor. Returns `None` for
    /// control and non-ASCII characters.
    #[must_use]
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            WALL_MARKER => Some(Self::Wall),
            SPACE_MARKER => Some(Self::Empty),
            c if c.is_ascii_graphic() => Some(Self::Empty),
            _ => None,
        }
    }
}

/// Immutable rectangular map of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from raw world-file rows.
    ///
    /// # Errors
    ///
    /// Returns [`WorldParseError::MalformedWorld`] if the number of rows is
    /// not `rows`, a row does not hold exactly `cols` characters, or a row
    /// contains a character outside the world alphabet.
    pub fn load(rows: usize, cols: usize, raw_rows: &[&str]) -> Result<Self, WorldParseError> {
        if raw_rows.len() != rows {
            return Err(WorldParseError::malformed(format!(
                "declared {rows} rows but found {}",
                raw_rows.len()
            )));
        }

        // Declared dimensions are untrusted until every row has been checked.
        let present: usize = raw_rows.iter().map(|line| line.len()).sum();
        let mut cells = Vec::with_capacity(present);
        for (row, line) in raw_rows.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(WorldParseError::malformed(format!(
                    "row {row} has {width} cells, declared {cols}"
                )));
            }
            for (col, marker) in line.chars().enumerate() {
                let cell = Cell::from_marker(marker).ok_or_else(|| {
                    WorldParseError::malformed(format!(
                        "illegal character {marker:?} at row {row}, column {col}"
                    ))
                })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Cell at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells.get(pos.row * self.cols + pos.col).copied()
    }

    /// Whether `pos` is a wall. Positions outside the grid count as walls.
    #[must_use]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell(pos) != Some(Cell::Empty)
    }

    /// Destination of a movement action from `pos`, if it lands on floor.
    ///
    /// Returns `None` for Vacuum, for moves that leave the grid and for moves
    /// into a wall.
    #[must_use]
    pub fn step(&self, pos: Position, action: Action) -> Option<Position> {
        let (dr, dc) = action.delta()?;
        let dest = Position::new(
            pos.row.checked_add_signed(dr)?,
            pos.col.checked_add_signed(dc)?,
        );
        if self.is_wall(dest) {
            return None;
        }
        Some(dest)
    }
}
