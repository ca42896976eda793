//! Error types for board queries and engine commands.
//!
//! Every failure is local and recoverable: a rejected command leaves the
//! game state exactly as it was.

/// Why a move or shot was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The game already has a winner.
    #[display("the game is over")]
    GameOver,

    /// The turn cursor is not in a phase that accepts this command.
    #[display("not allowed in the current phase")]
    WrongPhase,

    /// The origin square does not hold a piece of the side to move.
    #[display("no piece of the side to move on the origin square")]
    NotOwnPiece,

    /// A different piece is currently chosen.
    #[display("origin differs from the chosen piece")]
    SelectionMismatch,

    /// The target is occupied, off the queen lines, or something is in the way.
    #[display("path is not clear")]
    BlockedPath,
}

/// Error returned by board queries and engine commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RulesError {
    /// A coordinate lies outside the 10x10 grid.
    #[display("square ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// A queen move was rejected.
    #[display("illegal move: {}", _0)]
    IllegalMove(Rejection),

    /// An arrow shot was rejected.
    #[display("illegal shot: {}", _0)]
    IllegalShot(Rejection),
}

impl std::error::Error for RulesError {}
