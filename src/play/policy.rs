//! Move-selection policies for automated players.
//!
//! A policy picks one complete move for a side. It never mutates the game;
//! the caller applies the returned move through the rules engine.

use crate::core::{GameRng, GameState, Move, Side};
use crate::rules::RulesEngine;

/// Strategy for choosing a move.
pub trait MovePolicy: Send + Sync {
    /// Choose a move for `side`.
    ///
    /// Returns `None` if `side` has no legal move.
    fn choose_move(
        &self,
        rules: &RulesEngine,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Option<Move>;
}

/// Uniform random policy.
///
/// Every legal move is equally likely. Samples in one pass over the lazy
/// enumeration without collecting it.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl MovePolicy for UniformRandom {
    fn choose_move(
        &self,
        rules: &RulesEngine,
        state: &GameState,
        side: Side,
        rng: &mut GameRng,
    ) -> Option<Move> {
        rng.choose_iter(rules.legal_moves(state, side))
    }
}

/// Deterministic policy: always the first move in enumeration order.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl MovePolicy for FirstLegal {
    fn choose_move(
        &self,
        rules: &RulesEngine,
        state: &GameState,
        side: Side,
        _rng: &mut GameRng,
    ) -> Option<Move> {
        rules.legal_moves(state, side).next()
    }
}
