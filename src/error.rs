/// Reasons a submitted move is rejected.
///
/// A rejected move never changes the game: board, groups and move log are left
/// exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Illegal move: player is not in this game")]
    PlayerNotInGame,

    #[error("Illegal move: not this player's turn")]
    OutOfTurn,

    #[error("Illegal move: point not EMPTY")]
    PointOccupied,

    #[error("Illegal move: suicide")]
    SuicideMove,

    #[error("Illegal move: point is off the board")]
    OutOfBounds,
}

/// Errors raised when creating a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board size {0}: must be at least 1")]
    InvalidSize(u8),
}

/// Errors raised when rebuilding a game from a move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("move {index} of the log was rejected: {source}")]
    Move { index: usize, source: MoveError },
}
