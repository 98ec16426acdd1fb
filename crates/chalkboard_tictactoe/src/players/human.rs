//! Human player whose moves come from the presentation layer.

use super::{Player, Proposal};
use crate::board::Board;
use crate::types::Side;

/// Human player. Never computes a move; the controller waits for
/// [`TurnController::submit`](crate::TurnController::submit) instead.
#[derive(Debug, Clone, derive_new::new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&mut self, _board: &Board, _side: Side) -> Proposal {
        Proposal::AwaitInput
    }

    fn takes_input(&self) -> bool {
        true
    }
}
