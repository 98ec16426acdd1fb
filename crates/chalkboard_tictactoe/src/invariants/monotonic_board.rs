//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::Board;
use crate::record::GameRecord;

/// Invariant: replaying the history onto an empty board never overwrites a
/// cell and reproduces the live board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameRecord> for MonotonicBoardInvariant {
    fn holds(record: &GameRecord) -> bool {
        let mut reconstructed = Board::new();

        for placement in record.history() {
            if !reconstructed.is_empty(placement.position) {
                return false;
            }
            reconstructed.place(placement.position, placement.side);
        }

        reconstructed == *record.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
