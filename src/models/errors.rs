use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Token does not name rock, paper or scissors
    #[error("invalid move: {0:?}")]
    InvalidMove(String),
    /// Statistics file exists but is not the expected JSON
    #[error("statistics file is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// Statistics file parses but its counters do not add up
    #[error(
        "statistics file is inconsistent: {player_wins} + {computer_wins} + {ties} != {total_games}"
    )]
    Inconsistent {
        player_wins: u32,
        computer_wins: u32,
        ties: u32,
        total_games: u32,
    },
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
