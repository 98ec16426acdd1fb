//! The live board together with the moves that produced it.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Move, Side};
use serde::Serialize;

/// A committed move: who played where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Placement {
    /// The side that moved.
    pub side: Side,
    /// The cell that was marked.
    pub position: Move,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position)
    }
}

/// Board plus ordered move history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameRecord {
    pub(crate) board: Board,
    pub(crate) history: Vec<Placement>,
}

impl GameRecord {
    /// An empty board with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a record by playing `positions` alternately, crosses first.
    ///
    /// Only occupancy is checked; moves after a win are not rejected.
    pub fn replay(positions: &[Move]) -> Result<Self, MoveError> {
        let mut record = Self::new();
        let mut side = Side::Cross;
        for &position in positions {
            if !record.board.is_empty(position) {
                return Err(MoveError::CellOccupied(position));
            }
            record.commit(Placement::new(side, position));
            side = side.opponent();
        }
        Ok(record)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// The most recent placement.
    pub fn last(&self) -> Option<Placement> {
        self.history.last().copied()
    }

    /// Applies a placement the caller has already validated.
    pub(crate) fn commit(&mut self, placement: Placement) {
        self.board.place(placement.position, placement.side);
        self.history.push(placement);
    }
}
