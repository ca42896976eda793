//! Match configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::SQUARE_COUNT;

/// Upper bound on the length of any game: every turn burns a square and
/// the 8 queens always occupy 8 of them.
pub const MAX_GAME_TURNS: u32 = (SQUARE_COUNT - 8) as u32;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Random seed for the policies' RNG streams.
    /// Same seed and policies produce the same game.
    pub seed: u64,

    /// Completed turns after which the driver gives up.
    /// The default never triggers from a legal position.
    pub max_turns: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_turns: MAX_GAME_TURNS,
        }
    }
}

impl MatchConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom turn limit.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}
