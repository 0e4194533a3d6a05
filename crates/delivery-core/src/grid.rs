//! Integer grid coordinate type and cardinal directions.
//!
//! `GridPos` uses `i32` coordinates: routes are short character sequences,
//! so positions stay within a few thousand cells of the origin.  `i32` keeps
//! the pair at 8 bytes and hashes fast as a visited-set key.

/// A cell on the integer delivery grid.
///
/// Two positions are equal iff both coordinates match; the derived `Hash`
/// agrees with that equality, so `GridPos` works directly as a set key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// The shared starting cell for every agent.
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> GridPos {
        let (dx, dy) = direction.delta();
        GridPos { x: self.x + dx, y: self.y + dy }
    }

    /// Manhattan (taxicab) distance to `other` — the minimum number of
    /// cardinal steps between the two cells.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal movement direction.
///
/// The grid is y-up: north increases `y`, east increases `x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The `(dx, dy)` displacement of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// The instruction symbol for this direction (`^ > v <`).
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }

    /// Decode an instruction symbol; `None` for anything outside `^>v<`.
    #[inline]
    pub fn from_symbol(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{name}")
    }
}
