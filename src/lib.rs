//! # amazons
//!
//! Rules engine for the Game of the Amazons.
//!
//! Two sides each move one of four queens along a queen line, then shoot an
//! arrow from the queen's new square along another queen line, burning the
//! square it lands on for the rest of the game. A side with no legal move
//! on its turn loses.
//!
//! ## Design Principles
//!
//! 1. **One Engine**: every front end (two humans, human versus computer,
//!    computer versus computer, the Python GUI) composes over the same
//!    `RulesEngine`.
//!
//! 2. **Explicit State**: a `GameState` is an owned value passed to each
//!    call. There is no global game.
//!
//! 3. **Unrepresentable Illegal Cells**: cells are `Empty | Piece(Side) |
//!    Arrow`, squares are bounds-checked at construction.
//!
//! 4. **Reject, Never Corrupt**: a failed command returns a typed error and
//!    leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: sides, squares, board, game state, errors, RNG
//! - `rules`: path checks, move application, move enumeration, terminal check
//! - `play`: move policies and the match driver
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod play;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, GameOutcome, GameRng, GameState, GameStateBuilder, Move, Rejection,
    RulesError, Side, Square, TurnPhase, BOARD_SIZE,
};

pub use crate::rules::RulesEngine;

pub use crate::play::{
    FirstLegal, Match, MatchConfig, MatchError, MatchResult, MovePolicy, UniformRandom,
};
