//! Board coordinates and queen-line geometry.
//!
//! ## Square
//!
//! A validated `(row, col)` pair on the 10x10 grid. Rows grow downwards
//! from the first player's edge; both coordinates are 0-based.
//!
//! ## Direction
//!
//! The 8 queen directions in the fixed sweep order used by move
//! enumeration: N, S, W, E, NW, NE, SW, SE.

use serde::{Deserialize, Serialize};

use super::error::RulesError;

/// Board edge length.
pub const BOARD_SIZE: usize = 10;

/// Total number of squares.
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A square on the board.
///
/// Always in bounds: the only constructors check the coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, failing with `OutOfBounds` off the grid.
    ///
    /// ```
    /// use amazons::core::Square;
    ///
    /// assert!(Square::new(9, 0).is_ok());
    /// assert!(Square::new(3, 10).is_err());
    /// assert!(Square::new(-1, 4).is_err());
    /// ```
    pub fn new(row: i64, col: i64) -> Result<Self, RulesError> {
        Self::checked(row, col).ok_or(RulesError::OutOfBounds { row, col })
    }

    /// Create a square, returning `None` off the grid.
    #[must_use]
    pub fn checked(row: i64, col: i64) -> Option<Self> {
        let size = BOARD_SIZE as i64;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square at a row-major index (`0..100`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SQUARE_COUNT).then(|| Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }

    /// Row (0-based).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column (0-based).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index into the board storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// The neighbouring square in `dir`, if it is on the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.delta();
        Self::checked(self.row as i64 + dr as i64, self.col as i64 + dc as i64)
    }

    /// Iterate over the squares from here towards the edge in `dir`,
    /// excluding this square.
    pub fn ray(self, dir: Direction) -> Ray {
        Ray { next: self.step(dir), dir }
    }

    /// Direction and distance to `other` if both lie on one queen line.
    ///
    /// Returns `None` for identical squares or a non-queen relation.
    #[must_use]
    pub fn line_to(self, other: Square) -> Option<(Direction, usize)> {
        let dr = other.row as i64 - self.row as i64;
        let dc = other.col as i64 - self.col as i64;
        if dr == 0 && dc == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }
        let dir = Direction::from_delta(dr.signum() as i8, dc.signum() as i8)?;
        Some((dir, dr.abs().max(dc.abs()) as usize))
    }

    /// All 100 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SQUARE_COUNT).filter_map(Square::from_index)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the 8 queen directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// All directions in sweep order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// `(d_row, d_col)` unit step.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Direction for a unit step, `None` for `(0, 0)` or non-unit input.
    #[must_use]
    pub fn from_delta(dr: i8, dc: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }
}

/// Squares along a direction, nearest first, stopping at the edge.
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Square>,
    dir: Direction,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.step(self.dir);
        Some(current)
    }
}
