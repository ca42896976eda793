//! Cell contents and the 10x10 board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::RulesError;
use super::side::Side;
use super::square::{Square, BOARD_SIZE};

/// Canonical starting squares for White.
pub const WHITE_START: [(i64, i64); 4] = [(0, 3), (0, 6), (3, 0), (3, 9)];

/// Canonical starting squares for Black.
pub const BLACK_START: [(i64, i64); 4] = [(6, 0), (6, 9), (9, 3), (9, 6)];

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// A queen owned by a side.
    Piece(Side),
    /// Burnt by an arrow: impassable and unoccupiable for the rest of the game.
    Arrow,
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the piece on this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Cell::Piece(side) => Some(side),
            _ => None,
        }
    }

    /// Diagram symbol: `.` empty, `W`/`B` queens, `X` arrow.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(side) => side.symbol(),
            Cell::Arrow => 'X',
        }
    }
}

/// The 10x10 grid of cells.
///
/// Read access is public; writes go through the rules engine so the
/// piece-count and arrow-count invariants hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board with every square empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the canonical starting layout: 4 queens per side, no arrows.
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (side, squares) in [(Side::White, WHITE_START), (Side::Black, BLACK_START)] {
            for (row, col) in squares {
                board.cells[row as usize][col as usize] = Cell::Piece(side);
            }
        }
        board
    }

    /// Get the cell at a square.
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    /// Get the cell at raw coordinates, failing with `OutOfBounds` off the grid.
    pub fn cell_at(&self, row: i64, col: i64) -> Result<Cell, RulesError> {
        Square::new(row, col).map(|square| self.get(square))
    }

    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.row()][square.col()] = cell;
    }

    /// Check if a square is empty.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// Squares holding `side`'s pieces, in row-major order.
    #[must_use]
    pub fn pieces(&self, side: Side) -> SmallVec<[Square; 4]> {
        Square::all()
            .filter(|&square| self.get(square) == Cell::Piece(side))
            .collect()
    }

    /// Number of squares holding exactly `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count()
    }

    /// Number of burnt squares.
    #[must_use]
    pub fn arrow_count(&self) -> usize {
        self.count(Cell::Arrow)
    }

    /// Rows of cells, top (row 0) first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
