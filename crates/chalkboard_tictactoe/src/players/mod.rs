//! Player trait and implementations.
//!
//! A player produces moves for one side. Computer players answer
//! synchronously from a board snapshot; the human player defers to the next
//! external input event.

mod human;
pub mod minimax;
pub mod random;

pub use human::HumanPlayer;
pub use minimax::{MinimaxPlayer, SearchDepth};
pub use random::RandomPlayer;

use crate::board::Board;
use crate::types::{Move, Side};

/// What a player answers when asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    /// Play this cell now.
    Play(Move),
    /// The move will arrive later as an input event.
    AwaitInput,
    /// No legal move exists (the board is full).
    NoMove,
}

/// Trait for players that can make moves.
pub trait Player: std::fmt::Debug {
    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Proposes a move for `side` on a read-only snapshot of the live board.
    ///
    /// Computer players must only ever propose empty cells.
    fn propose(&mut self, board: &Board, side: Side) -> Proposal;

    /// True if this player's moves arrive through external input.
    fn takes_input(&self) -> bool {
        false
    }
}
