//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameRng, GameState, BOARD_SIZE};
use crate::play::{MovePolicy, UniformRandom};
use crate::rules::RulesEngine;

use super::py_core::{
    board_codes, cell_code, move_tuple, parse_side, phase_name, rules_err, side_name, square,
    winner_name, PyMoveTuple,
};

/// Python wrapper for one Amazons game session.
///
/// Front ends call `select_piece` / `apply_move` / `apply_arrow` from
/// their click handlers and redraw from `board()` or `cell_at`.
#[pyclass(name = "Game")]
pub struct PyGame {
    rules: RulesEngine,
    state: GameState,
}

#[pymethods]
impl PyGame {
    /// Create a game in the starting position, White to move.
    #[new]
    fn new() -> Self {
        Self {
            rules: RulesEngine::new(),
            state: GameState::new_game(),
        }
    }

    /// Cell code at (row, col): 0 empty, 1 white, 2 black, 3 arrow.
    ///
    /// Raises ValueError off the board.
    fn cell_at(&self, row: i64, col: i64) -> PyResult<i8> {
        self.state.cell_at(row, col).map(cell_code).map_err(rules_err)
    }

    /// Whole board as a 10x10 int8 numpy array of cell codes.
    fn board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        PyArray1::from_vec_bound(py, board_codes(&self.state))
            .reshape([BOARD_SIZE, BOARD_SIZE])
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
    }

    /// "white" or "black".
    #[getter]
    fn side_to_move(&self) -> &'static str {
        side_name(self.state.side_to_move())
    }

    /// "idle", "piece_chosen" or "arrow_pending".
    #[getter]
    fn phase(&self) -> &'static str {
        phase_name(self.state.phase())
    }

    /// Winner's side name, or None while the game is in progress.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        winner_name(self.state.outcome())
    }

    /// Number of completed turns.
    #[getter]
    fn turns_completed(&self) -> u32 {
        self.state.turns_completed()
    }

    /// Check whether a queen or arrow could travel from one square to another.
    fn path_is_clear(&self, from_row: i64, from_col: i64, to_row: i64, to_col: i64) -> bool {
        self.rules
            .path_is_clear_coords(&self.state, from_row, from_col, to_row, to_col)
    }

    /// Choose a queen of the side to move.
    fn select_piece(&mut self, row: i64, col: i64) -> PyResult<()> {
        let sq = square(row, col)?;
        self.rules
            .select_piece(&mut self.state, sq)
            .map_err(rules_err)
    }

    /// Drop the current choice, if any.
    fn deselect(&mut self) {
        self.rules.deselect(&mut self.state);
    }

    /// Move a queen. Raises ValueError if the move is illegal.
    fn apply_move(&mut self, from_row: i64, from_col: i64, to_row: i64, to_col: i64) -> PyResult<()> {
        let from = square(from_row, from_col)?;
        let to = square(to_row, to_col)?;
        self.rules
            .apply_move(&mut self.state, from, to)
            .map_err(rules_err)
    }

    /// Shoot the arrow, completing the turn.
    ///
    /// Returns the winner's side name if this shot ended the game.
    fn apply_arrow(&mut self, row: i64, col: i64) -> PyResult<Option<&'static str>> {
        let to = square(row, col)?;
        let outcome = self
            .rules
            .apply_arrow(&mut self.state, to)
            .map_err(rules_err)?;
        Ok(winner_name(outcome))
    }

    /// All complete moves for a side (default: side to move) as 6-tuples.
    #[pyo3(signature = (side = None))]
    fn legal_moves(&self, side: Option<&str>) -> PyResult<Vec<PyMoveTuple>> {
        let side = match side {
            Some(name) => parse_side(name)?,
            None => self.state.side_to_move(),
        };
        Ok(self
            .rules
            .legal_moves(&self.state, side)
            .map(move_tuple)
            .collect())
    }

    /// Check if a side (default: side to move) has any complete move.
    #[pyo3(signature = (side = None))]
    fn has_legal_move(&self, side: Option<&str>) -> PyResult<bool> {
        let side = match side {
            Some(name) => parse_side(name)?,
            None => self.state.side_to_move(),
        };
        Ok(self.rules.has_legal_move(&self.state, side))
    }

    /// Pick a uniformly random move for the side to move without applying it.
    fn random_move(&self, seed: u64) -> Option<PyMoveTuple> {
        let mut rng = GameRng::new(seed);
        UniformRandom
            .choose_move(&self.rules, &self.state, self.state.side_to_move(), &mut rng)
            .map(move_tuple)
    }

    /// Copy the game.
    fn copy(&self) -> Self {
        Self {
            rules: self.rules,
            state: self.state.clone(),
        }
    }

    fn __str__(&self) -> String {
        self.state.board().to_string()
    }

    fn __repr__(&self) -> String {
        let status = winner_name(self.state.outcome())
            .map(|w| format!("won by {w}"))
            .unwrap_or_else(|| "ongoing".to_string());
        format!(
            "Game(turn={}, to_move={}, status={})",
            self.state.turns_completed(),
            side_name(self.state.side_to_move()),
            status
        )
    }
}
