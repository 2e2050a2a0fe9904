//! The closed set of robot actions and their canonical ordering.

/// A single robot action.
///
/// Declaration order is the canonical order used by the successor generator:
/// the four moves first (North, South, East, West), then Vacuum. Depth-first
/// search relies on this order to decide which branch it explores first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Move one row up.
    North,
    /// Move one row down.
    South,
    /// Move one column right.
    East,
    /// Move one column left.
    West,
    /// Clean the current cell.
    Vacuum,
}

impl Action {
    /// Movement actions in canonical order.
    pub const MOVES: [Action; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Every action in canonical order.
    pub const ALL: [Action; 5] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Vacuum,
    ];

    /// Single-letter label used in plans and reports.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
            Self::Vacuum => 'V',
        }
    }

    /// Inverse of [`Action::label`]. Returns `None` for unknown letters.
    #[must_use]
    pub const fn from_label(label: char) -> Option<Self> {
        match label {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            'V' => Some(Self::Vacuum),
            _ => None,
        }
    }

    /// `(row, col)` offset of a movement action; `None` for Vacuum.
    #[must_use]
    pub const fn delta(self) -> Option<(isize, isize)> {
        match self {
            Self::North => Some((-1, 0)),
            Self::South => Some((1, 0)),
            Self::East => Some((0, 1)),
            Self::West => Some((0, -1)),
            Self::Vacuum => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
