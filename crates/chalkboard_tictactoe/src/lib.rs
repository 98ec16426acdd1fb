//! Chalkboard tic-tac-toe core.
//!
//! Rules engine, turn controller and computer players for a 3×3
//! tic-tac-toe game. Rendering is left to the caller: the controller reports
//! turns and move outcomes through a [`GameObserver`] and accepts human moves
//! through [`TurnController::submit`].
//!
//! # Architecture
//!
//! - **Board**: the 3×3 grid and its move counter
//! - **Rules**: pure win/draw detection over board snapshots
//! - **Players**: human input, uniform random, and minimax search
//! - **Controller**: the turn state machine that owns the live board
//!
//! # Example
//!
//! ```
//! use chalkboard_tictactoe::{GameConfig, GameEvent, Move, PlayerKind, TurnController, TurnState};
//!
//! # fn main() -> Result<(), chalkboard_tictactoe::GameError> {
//! let config = GameConfig::new(PlayerKind::Human, "minimax:hard".parse()?).with_seed(1);
//! let mut game = TurnController::from_config(&config, Vec::<GameEvent>::new())?;
//!
//! game.start()?;
//! game.submit(Move::new(0, 0)?)?;
//!
//! // The computer answered the corner opening with the center.
//! assert_eq!(game.history()[1].position, Move::CENTER);
//! assert!(matches!(game.state(), TurnState::WaitingForMove(_)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod controller;
mod error;
mod events;
pub mod invariants;
mod outcome;
pub mod players;
mod record;
pub mod rules;
mod types;

pub use board::Board;
pub use config::{Difficulty, GameConfig, PlayerKind};
pub use controller::{TurnController, TurnState};
pub use error::{ConfigError, GameError, MoveError};
pub use events::{GameEvent, GameObserver, NullObserver};
pub use outcome::{Diagonal, GameOutcome, WinLine};
pub use players::{HumanPlayer, MinimaxPlayer, Player, Proposal, RandomPlayer, SearchDepth};
pub use record::{GameRecord, Placement};
pub use types::{Cell, Move, Side};
