//! Game state: board, side to move, turn cursor and outcome.
//!
//! ## Turn cursor
//!
//! A turn has two phases. The side to move relocates one queen, then must
//! shoot an arrow from the queen's new square:
//!
//! ```text
//! Idle --select--> PieceChosen --move--> ArrowPending --shoot--> Idle (side flipped)
//! ```
//!
//! A `GameState` is only mutated through `RulesEngine`. A fresh game is a
//! fresh `GameState`; nothing resets one in place.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use super::error::RulesError;
use super::side::Side;
use super::square::Square;
use crate::rules::movegen;

/// Where the side to move is within its turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No piece chosen yet.
    #[default]
    Idle,
    /// A queen of the side to move has been picked but not moved.
    PieceChosen(Square),
    /// The queen now standing on this square has moved; an arrow from it
    /// is required before the turn completes.
    ArrowPending(Square),
}

/// Result of the game so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Nobody has won yet.
    #[default]
    InProgress,
    /// The given side won: its opponent had no legal move on its turn.
    Won(Side),
}

impl GameOutcome {
    /// Check if the game is decided.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameOutcome::Won(_))
    }

    /// The winner, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::Won(side) => Some(side),
            GameOutcome::InProgress => None,
        }
    }
}

/// A complete turn: queen relocation plus arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the queen leaves.
    pub from: Square,
    /// Square the queen lands on.
    pub to: Square,
    /// Square burnt by the arrow shot from `to`.
    pub arrow: Square,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: Square, to: Square, arrow: Square) -> Self {
        Self { from, to, arrow }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} / {}", self.from, self.to, self.arrow)
    }
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    phase: TurnPhase,
    outcome: GameOutcome,
    turns_completed: u32,
}

impl GameState {
    /// Create a game in the canonical starting position, White to move.
    #[must_use]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Side::White,
            phase: TurnPhase::Idle,
            outcome: GameOutcome::InProgress,
            turns_completed: 0,
        }
    }

    /// Start building a custom position.
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at a square.
    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.board.get(square)
    }

    /// Cell at raw coordinates, failing with `OutOfBounds` off the grid.
    pub fn cell_at(&self, row: i64, col: i64) -> Result<Cell, RulesError> {
        self.board.cell_at(row, col)
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Position of the turn cursor.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Outcome so far.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if the game is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Number of completed move+shot turns.
    #[must_use]
    pub fn turns_completed(&self) -> u32 {
        self.turns_completed
    }

    // === Engine-only mutators ===

    pub(crate) fn set_cell(&mut self, square: Square, cell: Cell) {
        self.board.set(square, cell);
    }

    pub(crate) fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    pub(crate) fn set_outcome(&mut self, outcome: GameOutcome) {
        debug_assert!(!self.outcome.is_over(), "outcome is set at most once");
        self.outcome = outcome;
    }

    /// Hand the turn to the opponent.
    pub(crate) fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        self.phase = TurnPhase::Idle;
        self.turns_completed += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

/// Builder for arbitrary positions (analysis, puzzles, tests).
///
/// Starts from an empty board with White to move. `build` evaluates the
/// outcome for the side to move, so a position where that side is already
/// stuck comes out decided.
///
/// ```
/// use amazons::core::{GameOutcome, GameState, Side, Square};
///
/// let sq = |r, c| Square::new(r, c).unwrap();
/// let state = GameState::builder()
///     .piece(Side::White, sq(0, 0))
///     .piece(Side::Black, sq(9, 9))
///     .side_to_move(Side::Black)
///     .build();
///
/// assert_eq!(state.side_to_move(), Side::Black);
/// assert_eq!(state.outcome(), GameOutcome::InProgress);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameStateBuilder {
    board: Board,
    side_to_move: Option<Side>,
    turns_completed: u32,
}

impl GameStateBuilder {
    /// Empty board, White to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the canonical layout instead of an empty board.
    pub fn from_start() -> Self {
        Self {
            board: Board::starting(),
            ..Self::default()
        }
    }

    /// Place a queen.
    pub fn piece(mut self, side: Side, square: Square) -> Self {
        self.board.set(square, Cell::Piece(side));
        self
    }

    /// Burn a square.
    pub fn arrow(mut self, square: Square) -> Self {
        self.board.set(square, Cell::Arrow);
        self
    }

    /// Clear a square.
    pub fn clear(mut self, square: Square) -> Self {
        self.board.set(square, Cell::Empty);
        self
    }

    /// Set the side to move.
    pub fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = Some(side);
        self
    }

    /// Set the completed-turn counter (defaults to 0).
    pub fn turns_completed(mut self, turns: u32) -> Self {
        self.turns_completed = turns;
        self
    }

    /// Build the state, phase `Idle`, with the outcome evaluated.
    pub fn build(self) -> GameState {
        let side_to_move = self.side_to_move.unwrap_or(Side::White);
        let outcome = movegen::terminal_outcome(&self.board, side_to_move);
        GameState {
            board: self.board,
            side_to_move,
            phase: TurnPhase::Idle,
            outcome,
            turns_completed: self.turns_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i64, col: i64) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new_game();
        assert_eq!(state.side_to_move(), Side::White);
        assert_eq!(state.phase(), TurnPhase::Idle);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.turns_completed(), 0);
        assert_eq!(state.board(), &Board::starting());
    }

    #[test]
    fn test_cell_at() {
        let state = GameState::new_game();
        assert_eq!(state.cell_at(0, 3), Ok(Cell::Piece(Side::White)));
        assert_eq!(state.cell_at(9, 6), Ok(Cell::Piece(Side::Black)));
        assert_eq!(state.cell_at(5, 5), Ok(Cell::Empty));
        assert_eq!(
            state.cell_at(5, 10),
            Err(RulesError::OutOfBounds { row: 5, col: 10 })
        );
    }

    #[test]
    fn test_end_turn() {
        let mut state = GameState::new_game();
        state.set_phase(TurnPhase::ArrowPending(sq(5, 3)));
        state.end_turn();
        assert_eq!(state.side_to_move(), Side::Black);
        assert_eq!(state.phase(), TurnPhase::Idle);
        assert_eq!(state.turns_completed(), 1);
    }

    #[test]
    fn test_builder_defaults() {
        let state = GameState::builder()
            .piece(Side::White, sq(4, 4))
            .piece(Side::Black, sq(8, 1))
            .arrow(sq(0, 0))
            .build();

        assert_eq!(state.side_to_move(), Side::White);
        assert_eq!(state.cell(sq(4, 4)), Cell::Piece(Side::White));
        assert_eq!(state.cell(sq(0, 0)), Cell::Arrow);
        assert_eq!(state.board().arrow_count(), 1);
        assert!(!state.is_over());
    }

    #[test]
    fn test_builder_detects_stuck_side() {
        // White's only queen sits in a corner boxed in by arrows.
        let state = GameState::builder()
            .piece(Side::White, sq(0, 0))
            .arrow(sq(0, 1))
            .arrow(sq(1, 0))
            .arrow(sq(1, 1))
            .piece(Side::Black, sq(9, 9))
            .build();

        assert_eq!(state.outcome(), GameOutcome::Won(Side::Black));
    }

    #[test]
    fn test_builder_from_start() {
        let state = GameStateBuilder::from_start()
            .clear(sq(0, 3))
            .piece(Side::White, sq(5, 3))
            .side_to_move(Side::Black)
            .turns_completed(1)
            .build();

        assert_eq!(state.cell(sq(0, 3)), Cell::Empty);
        assert_eq!(state.board().count(Cell::Piece(Side::White)), 4);
        assert_eq!(state.turns_completed(), 1);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!GameOutcome::InProgress.is_over());
        assert_eq!(GameOutcome::InProgress.winner(), None);
        assert!(GameOutcome::Won(Side::White).is_over());
        assert_eq!(GameOutcome::Won(Side::White).winner(), Some(Side::White));
    }

    #[test]
    fn test_state_serializes() {
        let json = serde_json::to_value(GameState::new_game()).unwrap();
        assert_eq!(json["side_to_move"], "White");
        assert_eq!(json["phase"], "Idle");
        assert_eq!(json["turns_completed"], 0);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(sq(0, 3), sq(5, 3), sq(5, 8));
        assert_eq!(mv.to_string(), "(0, 3) -> (5, 3) / (5, 8)");
    }
}
