//! Computer player that picks a uniformly random empty cell.

use super::{Player, Proposal};
use crate::board::Board;
use crate::types::{Move, Side};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks uniformly among the empty cells of `board`.
///
/// Enumerates the empty cells directly, so it terminates on any board and
/// returns `None` when the board is full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    let empty: Vec<Move> = board.empty_cells().collect();
    empty.choose(rng).copied()
}

/// Random computer player.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player drawing from `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            name: "Random computer".to_string(),
            rng,
        }
    }

    /// Creates a reproducible random player.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&mut self, board: &Board, side: Side) -> Proposal {
        match random_move(board, &mut self.rng) {
            Some(mv) => {
                debug!(%side, %mv, "Random player chose cell");
                Proposal::Play(mv)
            }
            None => Proposal::NoMove,
        }
    }
}
