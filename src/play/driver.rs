//! Plays complete games between two policies.
//!
//! This is the "computer versus computer" caller of the engine; a human
//! front end drives `RulesEngine` commands directly instead.

use tracing::{debug, info, instrument};

use crate::core::{GameOutcome, GameRng, GameState, RulesError, Side};
use crate::rules::RulesEngine;

use super::config::MatchConfig;
use super::policy::{MovePolicy, UniformRandom};

/// Summary of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// Final outcome (always decided).
    pub outcome: GameOutcome,
    /// Completed turns at the end of the game.
    pub turns: u32,
}

impl MatchResult {
    /// The winning side.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.outcome.winner()
    }
}

/// Error that stops a match before it is decided.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MatchError {
    /// A policy produced a move the engine rejected.
    #[display("engine rejected a policy move: {}", _0)]
    #[from]
    Engine(RulesError),

    /// A policy returned no move although its side still has one.
    #[display("{} policy returned no move", _0)]
    NoMove(Side),

    /// The configured turn limit was reached.
    #[display("turn limit of {} reached", _0)]
    TurnLimit(u32),
}

impl std::error::Error for MatchError {}

/// Match driver: one policy and one RNG stream per side.
pub struct Match {
    rules: RulesEngine,
    config: MatchConfig,
    policies: [Box<dyn MovePolicy>; 2],
    rngs: [GameRng; 2],
}

impl Match {
    /// Create a match with uniform random play for both sides.
    pub fn new(config: MatchConfig) -> Self {
        let mut root = GameRng::new(config.seed);
        let rngs = [root.fork(), root.fork()];
        Self {
            rules: RulesEngine::new(),
            config,
            policies: [Box::new(UniformRandom), Box::new(UniformRandom)],
            rngs,
        }
    }

    /// Set the policy for one side.
    pub fn with_policy<P: MovePolicy + 'static>(mut self, side: Side, policy: P) -> Self {
        self.policies[side.index()] = Box::new(policy);
        self
    }

    /// Play one complete turn for the side to move.
    ///
    /// Returns the outcome after the turn. A pending selection is dropped
    /// first; a half-finished turn (arrow pending) is rejected by the engine.
    pub fn play_turn(&mut self, state: &mut GameState) -> Result<GameOutcome, MatchError> {
        if state.is_over() {
            return Ok(state.outcome());
        }

        let side = state.side_to_move();
        let idx = side.index();
        let mv = self.policies[idx]
            .choose_move(&self.rules, state, side, &mut self.rngs[idx])
            .ok_or(MatchError::NoMove(side))?;

        self.rules.deselect(state);
        let outcome = self.rules.apply_full_move(state, mv)?;
        debug!(%side, %mv, turn = state.turns_completed(), "played");
        Ok(outcome)
    }

    /// Play until the game is decided.
    #[instrument(skip_all, fields(seed = self.config.seed))]
    pub fn play(&mut self, state: &mut GameState) -> Result<MatchResult, MatchError> {
        loop {
            if let GameOutcome::Won(winner) = state.outcome() {
                let turns = state.turns_completed();
                info!(%winner, turns, "match finished");
                return Ok(MatchResult {
                    outcome: state.outcome(),
                    turns,
                });
            }

            if state.turns_completed() >= self.config.max_turns {
                return Err(MatchError::TurnLimit(self.config.max_turns));
            }

            self.play_turn(state)?;
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
