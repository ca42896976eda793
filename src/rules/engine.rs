//! The Amazons rules engine.
//!
//! `RulesEngine` is the only mutator of a `GameState`. Every command
//! validates completely before writing, so a rejected command leaves the
//! state exactly as it was.

use tracing::{debug, info, instrument, trace};

use crate::core::{
    Cell, GameOutcome, GameState, Move, Rejection, RulesError, Side, Square, TurnPhase,
};

use super::movegen;

/// Rules engine for the Game of the Amazons.
///
/// Stateless: all game data lives in the `GameState` passed to each call.
///
/// ## Example
///
/// ```
/// use amazons::core::{GameOutcome, GameState, Side, Square};
/// use amazons::rules::RulesEngine;
///
/// let rules = RulesEngine::new();
/// let mut state = GameState::new_game();
/// let sq = |r, c| Square::new(r, c).unwrap();
///
/// rules.apply_move(&mut state, sq(0, 3), sq(5, 3))?;
/// let outcome = rules.apply_arrow(&mut state, sq(5, 8))?;
///
/// assert_eq!(outcome, GameOutcome::InProgress);
/// assert_eq!(state.side_to_move(), Side::Black);
/// # Ok::<(), amazons::core::RulesError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RulesEngine;

impl RulesEngine {
    /// Create a rules engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    // === Queries ===

    /// True iff `to` is empty and reachable from `from` along a queen line
    /// with nothing in between. Same predicate for queens and arrows.
    #[must_use]
    pub fn path_is_clear(&self, state: &GameState, from: Square, to: Square) -> bool {
        movegen::path_is_clear(state.board(), from, to)
    }

    /// `path_is_clear` over raw coordinates; false if either end is off the board.
    #[must_use]
    pub fn path_is_clear_coords(
        &self,
        state: &GameState,
        from_row: i64,
        from_col: i64,
        to_row: i64,
        to_col: i64,
    ) -> bool {
        match (
            Square::checked(from_row, from_col),
            Square::checked(to_row, to_col),
        ) {
            (Some(from), Some(to)) => self.path_is_clear(state, from, to),
            _ => false,
        }
    }

    /// Every complete move available to `side` on the current board.
    ///
    /// Ordered by piece (row-major), then direction, then distance, for
    /// both legs. Depends only on the board, not on the turn cursor.
    pub fn legal_moves<'a>(
        &self,
        state: &'a GameState,
        side: Side,
    ) -> impl Iterator<Item = Move> + 'a {
        movegen::legal_moves(state.board(), side)
    }

    /// Check if `side` has any complete move. Stops at the first one found.
    #[must_use]
    pub fn has_legal_move(&self, state: &GameState, side: Side) -> bool {
        movegen::has_legal_move(state.board(), side)
    }

    /// `Won(opponent)` if `side` has no legal move, else `InProgress`.
    #[must_use]
    pub fn check_terminal(&self, state: &GameState, side: Side) -> GameOutcome {
        movegen::terminal_outcome(state.board(), side)
    }

    // === Commands ===

    /// Choose a queen of the side to move.
    ///
    /// Allowed from `Idle` or `PieceChosen` (re-choosing replaces the
    /// previous choice).
    #[instrument(skip(self, state), fields(side = %state.side_to_move()))]
    pub fn select_piece(&self, state: &mut GameState, square: Square) -> Result<(), RulesError> {
        let checked = if state.is_over() {
            Err(Rejection::GameOver)
        } else if matches!(state.phase(), TurnPhase::ArrowPending(_)) {
            Err(Rejection::WrongPhase)
        } else if state.cell(square) != Cell::Piece(state.side_to_move()) {
            Err(Rejection::NotOwnPiece)
        } else {
            Ok(())
        };

        if let Err(reason) = checked {
            debug!(%reason, "selection rejected");
            return Err(RulesError::IllegalMove(reason));
        }

        state.set_phase(TurnPhase::PieceChosen(square));
        Ok(())
    }

    /// Drop the current choice. Only `PieceChosen` changes; every other
    /// phase is left alone.
    pub fn deselect(&self, state: &mut GameState) {
        if let TurnPhase::PieceChosen(_) = state.phase() {
            state.set_phase(TurnPhase::Idle);
        }
    }

    /// Relocate a queen of the side to move from `from` to `to`.
    ///
    /// Requires phase `Idle`, or `PieceChosen(from)`. On success the phase
    /// becomes `ArrowPending(to)`.
    #[instrument(skip(self, state), fields(side = %state.side_to_move()))]
    pub fn apply_move(
        &self,
        state: &mut GameState,
        from: Square,
        to: Square,
    ) -> Result<(), RulesError> {
        if let Err(reason) = self.check_move(state, from, to) {
            debug!(%reason, "move rejected");
            return Err(RulesError::IllegalMove(reason));
        }

        let side = state.side_to_move();
        state.set_cell(from, Cell::Empty);
        state.set_cell(to, Cell::Piece(side));
        state.set_phase(TurnPhase::ArrowPending(to));
        Ok(())
    }

    /// Shoot the arrow from the queen that just moved, completing the turn.
    ///
    /// On success burns `to`, hands the turn to the opponent and returns
    /// the outcome evaluated for the new side to move.
    #[instrument(skip(self, state), fields(side = %state.side_to_move()))]
    pub fn apply_arrow(&self, state: &mut GameState, to: Square) -> Result<GameOutcome, RulesError> {
        let shooter = match self.check_shot(state, to) {
            Ok(shooter) => shooter,
            Err(reason) => {
                debug!(%reason, "shot rejected");
                return Err(RulesError::IllegalShot(reason));
            }
        };

        state.set_cell(to, Cell::Arrow);
        state.end_turn();
        trace!(%shooter, turn = state.turns_completed(), "turn complete");

        let outcome = self.check_terminal(state, state.side_to_move());
        if let GameOutcome::Won(winner) = outcome {
            info!(%winner, turns = state.turns_completed(), "game over");
            state.set_outcome(outcome);
        }
        Ok(outcome)
    }

    /// Apply a complete move atomically.
    ///
    /// Both legs run on a scratch copy that replaces `state` only if the
    /// shot also succeeds: on error the state is unchanged, whichever leg
    /// failed.
    pub fn apply_full_move(&self, state: &mut GameState, mv: Move) -> Result<GameOutcome, RulesError> {
        let mut scratch = state.clone();
        self.apply_move(&mut scratch, mv.from, mv.to)?;
        let outcome = self.apply_arrow(&mut scratch, mv.arrow)?;
        *state = scratch;
        Ok(outcome)
    }

    // === Validation ===

    fn check_move(&self, state: &GameState, from: Square, to: Square) -> Result<(), Rejection> {
        if state.is_over() {
            return Err(Rejection::GameOver);
        }
        match state.phase() {
            TurnPhase::Idle => {}
            TurnPhase::PieceChosen(chosen) if chosen == from => {}
            TurnPhase::PieceChosen(_) => return Err(Rejection::SelectionMismatch),
            TurnPhase::ArrowPending(_) => return Err(Rejection::WrongPhase),
        }
        if state.cell(from) != Cell::Piece(state.side_to_move()) {
            return Err(Rejection::NotOwnPiece);
        }
        if !self.path_is_clear(state, from, to) {
            return Err(Rejection::BlockedPath);
        }
        Ok(())
    }

    /// Returns the square the arrow is shot from.
    fn check_shot(&self, state: &GameState, to: Square) -> Result<Square, Rejection> {
        if state.is_over() {
            return Err(Rejection::GameOver);
        }
        let TurnPhase::ArrowPending(shooter) = state.phase() else {
            return Err(Rejection::WrongPhase);
        };
        if !self.path_is_clear(state, shooter, to) {
            return Err(Rejection::BlockedPath);
        }
        Ok(shooter)
    }
}
