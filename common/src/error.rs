use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell {0} is outside the board (valid cells are 0 to 8)")]
    OutOfRange(usize),

    #[error("cell {0} is already marked")]
    Occupied(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("cell {0} is outside the board (valid cells are 0 to 8)")]
    CellOutOfRange(usize),

    #[error("cell {0} is already marked")]
    CellOccupied(usize),

    #[error("it is not the player's turn")]
    NotHumanTurn,

    #[error("it is not the computer's turn")]
    NotComputerTurn,

    #[error("no round is in progress")]
    RoundNotInProgress,

    #[error("a round is already in progress")]
    RoundInProgress,

    #[error("the current round has not ended yet")]
    RoundNotEnded,

    #[error("the match is over, reset it to play again")]
    MatchOver,

    #[error("the match has already started, reset it to change difficulty")]
    MatchStarted,

    #[error("the board has no empty cells left")]
    NoMoveAvailable,
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange(cell) => MatchError::CellOutOfRange(cell),
            BoardError::Occupied(cell) => MatchError::CellOccupied(cell),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("failed to deserialize config: {0}")]
    Deserialize(String),

    #[error("config validation error: {0}")]
    Invalid(String),
}
