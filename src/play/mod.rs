//! Automated play on top of the rules engine.
//!
//! ## Usage
//!
//! ```rust
//! use amazons::core::GameState;
//! use amazons::play::{Match, MatchConfig};
//!
//! let mut state = GameState::new_game();
//! let mut game = Match::new(MatchConfig::default().with_seed(7));
//!
//! let result = game.play(&mut state).expect("random play always finishes");
//! assert!(result.winner().is_some());
//! ```
//!
//! ## Custom Policies
//!
//! Implement `MovePolicy` and install it for one side:
//!
//! ```rust
//! use amazons::core::Side;
//! use amazons::play::{FirstLegal, Match, MatchConfig};
//!
//! let game = Match::new(MatchConfig::default()).with_policy(Side::Black, FirstLegal);
//! ```

pub mod config;
pub mod driver;
pub mod policy;

pub use config::{MatchConfig, MAX_GAME_TURNS};
pub use driver::{Match, MatchError, MatchResult};
pub use policy::{FirstLegal, MovePolicy, UniformRandom};
