//! Move counter invariant.

use super::Invariant;
use crate::record::GameRecord;
use crate::types::Move;

/// Invariant: the board's move counter equals both the number of marked
/// cells and the length of the history.
pub struct MoveCountInvariant;

impl Invariant<GameRecord> for MoveCountInvariant {
    fn holds(record: &GameRecord) -> bool {
        let board = record.board();
        let marked = Move::ALL.iter().filter(|&&mv| !board.is_empty(mv)).count();
        board.move_count() == marked && marked == record.history().len()
    }

    fn description() -> &'static str {
        "Move count matches marked cells and history length"
    }
}
