//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from board storage so both the turn controller and
//! the search code share one implementation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{line_owner, winner_at, winner_global, winning_line};

use crate::board::Board;
use crate::outcome::GameOutcome;
use crate::types::{Move, Side};

/// Evaluates the board right after `side` played `last`.
pub fn outcome_after(board: &Board, last: Move, side: Side) -> GameOutcome {
    if let Some(line) = winner_at(board, last) {
        return GameOutcome::Win { side, line };
    }
    if is_full(board) {
        return GameOutcome::Draw;
    }
    GameOutcome::Ongoing
}
