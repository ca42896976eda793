//! Core types: sides, squares, cells, board, game state, errors, RNG.
//!
//! Everything here is plain data. Mutation of a `GameState` is reserved to
//! the `rules` module.
//!
//! One dependency runs the other way: `GameStateBuilder::build` asks
//! `rules::movegen` whether the side to move is already stuck, so a built
//! position carries the correct outcome.

pub mod board;
pub mod error;
pub mod rng;
pub mod side;
pub mod square;
pub mod state;

pub use board::{Board, Cell, BLACK_START, WHITE_START};
pub use error::{Rejection, RulesError};
pub use rng::GameRng;
pub use side::Side;
pub use square::{Direction, Ray, Square, BOARD_SIZE, SQUARE_COUNT};
pub use state::{GameOutcome, GameState, GameStateBuilder, Move, TurnPhase};
