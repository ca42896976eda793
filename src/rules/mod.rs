//! Rules of the Game of the Amazons.
//!
//! - `movegen`: queen-line sweeps and move enumeration over a bare board
//! - `engine`: `RulesEngine`, the validated commands that mutate a
//!   `GameState` and the queries callers use to drive a game

pub mod engine;
pub mod movegen;

pub use engine::RulesEngine;
