//! Error types for the game core.

use crate::types::{Move, Side};
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A move that cannot be played. Always recoverable: nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates outside the 3×3 board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Move),

    /// The game has not been started yet.
    #[display("Game has not started")]
    NotStarted,

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// The side to move is a computer player; external input is not accepted.
    #[display("{_0} is played by the computer and does not take input")]
    NotAwaitingInput(#[error(not(source))] Side),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any failure surfaced by the turn controller.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A rejected move; the game state is unchanged.
    #[display("{_0}")]
    Move(MoveError),

    /// The game could not be set up.
    #[display("{_0}")]
    Config(ConfigError),

    /// A computer player broke its contract by proposing an illegal move
    /// (or none at all). This is a bug in the player, not a user error.
    #[display("Computer player for {side} failed: {detail}")]
    #[from(ignore)]
    ComputerFault {
        /// Side whose player misbehaved.
        side: Side,
        /// What went wrong.
        detail: String,
    },
}

impl GameError {
    /// True for errors that leave the game playable (a retry is possible).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::Move(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let occupied: GameError = MoveError::CellOccupied(Move::CENTER).into();
        assert!(occupied.is_recoverable());
        assert_eq!(occupied.to_string(), "Cell (1, 1) is already occupied");

        let fault = GameError::ComputerFault {
            side: Side::Nought,
            detail: "no move proposed".to_string(),
        };
        assert!(!fault.is_recoverable());
        assert_eq!(
            fault.to_string(),
            "Computer player for Nought failed: no move proposed"
        );
    }

    #[test]
    fn test_config_error_records_caller() {
        let err = ConfigError::new("bad");
        assert_eq!(err.message, "bad");
        assert!(err.file.ends_with("error.rs"));
    }
}
