//! Draw detection logic for tic-tac-toe.

use super::win::winner_global;
use crate::board::Board;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner_global(board).is_none()
}
