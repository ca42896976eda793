//! Conversions between engine types and Python values.
//!
//! Sides travel as the strings `"white"` / `"black"`, cells as small
//! integers so a board fits a numpy `int8` array.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, GameOutcome, GameState, Move, RulesError, Side, Square, TurnPhase};

/// Cell code for an empty square.
pub const EMPTY: i8 = 0;
/// Cell code for a white queen.
pub const WHITE: i8 = 1;
/// Cell code for a black queen.
pub const BLACK: i8 = 2;
/// Cell code for a burnt square.
pub const ARROW: i8 = 3;

/// A complete move as `(from_row, from_col, to_row, to_col, arrow_row, arrow_col)`.
pub type PyMoveTuple = (usize, usize, usize, usize, usize, usize);

pub(crate) fn rules_err(err: RulesError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

pub(crate) fn parse_side(name: &str) -> PyResult<Side> {
    match name.to_ascii_lowercase().as_str() {
        "white" | "a" => Ok(Side::White),
        "black" | "b" => Ok(Side::Black),
        other => Err(PyErr::new::<PyValueError, _>(format!(
            "unknown side {other:?}, expected \"white\" or \"black\""
        ))),
    }
}

pub(crate) fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "white",
        Side::Black => "black",
    }
}

pub(crate) fn square(row: i64, col: i64) -> PyResult<Square> {
    Square::new(row, col).map_err(rules_err)
}

pub(crate) fn cell_code(cell: Cell) -> i8 {
    match cell {
        Cell::Empty => EMPTY,
        Cell::Piece(Side::White) => WHITE,
        Cell::Piece(Side::Black) => BLACK,
        Cell::Arrow => ARROW,
    }
}

/// Cell codes for the whole board in row-major order.
pub(crate) fn board_codes(state: &GameState) -> Vec<i8> {
    Square::all().map(|sq| cell_code(state.cell(sq))).collect()
}

pub(crate) fn winner_name(outcome: GameOutcome) -> Option<&'static str> {
    outcome.winner().map(side_name)
}

pub(crate) fn phase_name(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::Idle => "idle",
        TurnPhase::PieceChosen(_) => "piece_chosen",
        TurnPhase::ArrowPending(_) => "arrow_pending",
    }
}

pub(crate) fn move_tuple(mv: Move) -> PyMoveTuple {
    (
        mv.from.row(),
        mv.from.col(),
        mv.to.row(),
        mv.to.col(),
        mv.arrow.row(),
        mv.arrow.col(),
    )
}
