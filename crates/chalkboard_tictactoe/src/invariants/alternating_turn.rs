//! Alternating turn invariant: sides alternate Cross, Nought, Cross, ...

use super::Invariant;
use crate::record::GameRecord;
use crate::types::Side;

/// Invariant: crosses move first and no side moves twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<GameRecord> for AlternatingTurnInvariant {
    fn holds(record: &GameRecord) -> bool {
        let history = record.history();

        if history.first().is_some_and(|first| first.side != Side::Cross) {
            return false;
        }

        history.windows(2).all(|pair| pair[0].side != pair[1].side)
    }

    fn description() -> &'static str {
        "Sides alternate turns (Cross, Nought, Cross, ...)"
    }
}
