//! Exhaustive minimax search without pruning.
//!
//! The 3×3 tree is small enough (at most 9! leaves) to search in full at
//! interactive latency, so there is no alpha-beta and no transposition table.

use super::{Player, Proposal};
use crate::board::Board;
use crate::rules::winner_global;
use crate::types::{Move, Side};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::num::NonZeroU8;
use tracing::{debug, instrument};

/// Base of the win score. A win found after `depth` hypothetical moves is
/// worth `WIN_BASE - depth`, so quicker wins and slower losses are preferred.
pub const WIN_BASE: i32 = 10;

/// How many plies the search may look ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDepth {
    /// Stop after this many hypothetical moves.
    Limited(NonZeroU8),
    /// Search to the end of the game.
    Unbounded,
}

impl SearchDepth {
    /// A limited depth; `None` for zero.
    pub fn limited(plies: u8) -> Option<Self> {
        NonZeroU8::new(plies).map(SearchDepth::Limited)
    }

    /// True once `depth` plies have been made and the search must stop.
    fn reached(self, depth: usize) -> bool {
        match self {
            SearchDepth::Limited(limit) => depth >= usize::from(limit.get()),
            SearchDepth::Unbounded => false,
        }
    }
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDepth::Limited(limit) => write!(f, "depth {limit}"),
            SearchDepth::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Leaf score of a finished line of play, from `searching`'s point of view.
fn win_score(winner: Side, searching: Side, depth: usize) -> i32 {
    (WIN_BASE - depth as i32) * i32::from(winner.value()) * i32::from(searching.value())
}

/// Scores `board` where `to_move` is next to play and `depth` hypothetical
/// moves have already been made since the root.
fn minimax(board: &Board, to_move: Side, searching: Side, depth: usize, limit: SearchDepth) -> i32 {
    if let Some(winner) = winner_global(board) {
        return win_score(winner, searching, depth);
    }
    if board.is_full() || limit.reached(depth) {
        return 0;
    }

    let scores = board.empty_cells().map(|mv| {
        let mut child = board.clone();
        child.place(mv, to_move);
        minimax(&child, to_move.opponent(), searching, depth + 1, limit)
    });

    let best = if to_move == searching {
        scores.max()
    } else {
        scores.min()
    };
    best.unwrap_or(0)
}

/// Scores every legal move for `side`, in row-major order.
pub fn score_moves(board: &Board, side: Side, limit: SearchDepth) -> Vec<(Move, i32)> {
    board
        .empty_cells()
        .map(|mv| {
            let mut child = board.clone();
            child.place(mv, side);
            (mv, minimax(&child, side.opponent(), side, 1, limit))
        })
        .collect()
}

/// All moves sharing the maximum score, in row-major order.
pub fn best_moves(board: &Board, side: Side, limit: SearchDepth) -> Vec<Move> {
    let scored = score_moves(board, side, limit);
    let Some(top) = scored.iter().map(|&(_, score)| score).max() else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|&(_, score)| score == top)
        .map(|(mv, _)| mv)
        .collect()
}

/// Picks the move for `side`, breaking ties between equally scored moves
/// uniformly at random.
///
/// An empty board is answered with the center without searching. Returns
/// `None` only on a full board.
#[instrument(skip(board, rng), fields(moves = board.move_count()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    limit: SearchDepth,
    rng: &mut R,
) -> Option<Move> {
    if board.move_count() == 0 {
        return Some(Move::CENTER);
    }
    let candidates = best_moves(board, side, limit);
    let choice = candidates.choose(rng).copied();
    debug!(ties = candidates.len(), choice = ?choice, "Minimax search finished");
    choice
}

/// Minimax computer player.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    depth: SearchDepth,
    rng: StdRng,
}

impl MinimaxPlayer {
    /// Creates a minimax player searching to `depth`, breaking ties with `rng`.
    pub fn new(depth: SearchDepth, rng: StdRng) -> Self {
        Self {
            name: format!("Minimax computer ({depth})"),
            depth,
            rng,
        }
    }

    /// Creates a reproducible minimax player.
    pub fn seeded(depth: SearchDepth, seed: u64) -> Self {
        Self::new(depth, StdRng::seed_from_u64(seed))
    }

    /// Creates a minimax player seeded from the operating system.
    pub fn unseeded(depth: SearchDepth) -> Self {
        Self::new(depth, StdRng::from_os_rng())
    }

    /// Search depth limit.
    pub fn depth(&self) -> SearchDepth {
        self.depth
    }
}

impl Player for MinimaxPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn propose(&mut self, board: &Board, side: Side) -> Proposal {
        match choose_move(board, side, self.depth, &mut self.rng) {
            Some(mv) => Proposal::Play(mv),
            None => Proposal::NoMove,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    fn depth(plies: u8) -> SearchDepth {
        SearchDepth::limited(plies).unwrap()
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(SearchDepth::limited(0), None);
    }

    #[test]
    fn test_win_score_prefers_fast_wins() {
        assert_eq!(win_score(Side::Cross, Side::Cross, 1), 9);
        assert_eq!(win_score(Side::Cross, Side::Cross, 3), 7);
        assert_eq!(win_score(Side::Nought, Side::Cross, 2), -8);
        assert_eq!(win_score(Side::Nought, Side::Nought, 2), 8);
    }

    #[test]
    fn test_empty_board_plays_center() {
        let mut rng = StdRng::seed_from_u64(0);
        for limit in [depth(1), depth(2), SearchDepth::Unbounded] {
            assert_eq!(
                choose_move(&Board::new(), Side::Cross, limit, &mut rng),
                Some(Move::CENTER)
            );
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_grid([[1, -1, 1], [-1, 1, 1], [-1, 1, -1]]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_move(&board, Side::Cross, SearchDepth::Unbounded, &mut rng), None);
    }

    #[test]
    fn test_depth_one_takes_immediate_win() {
        // X X . / O O . / . . .  with X to move
        let board = Board::from_grid([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(best_moves(&board, Side::Cross, depth(1)), vec![mv(0, 2)]);
    }

    #[test]
    fn test_depth_one_does_not_see_threats() {
        // O threatens the middle row; depth 1 only looks at its own move.
        let board = Board::from_grid([[1, 0, 0], [-1, -1, 0], [1, 0, 0]]).unwrap();
        let scored = score_moves(&board, Side::Cross, depth(1));
        assert!(scored.iter().all(|&(_, score)| score == 0));
        assert_eq!(scored.len(), 5);
    }

    #[test]
    fn test_depth_two_blocks() {
        let board = Board::from_grid([[1, 0, 0], [-1, -1, 0], [1, 0, 0]]).unwrap();
        assert_eq!(best_moves(&board, Side::Cross, depth(2)), vec![mv(1, 2)]);
    }

    #[test]
    fn test_prefers_winning_over_blocking() {
        // X can win on the top row; O also threatens the middle row.
        let board = Board::from_grid([[1, 1, 0], [-1, -1, 0], [1, 0, -1]]).unwrap();
        assert_eq!(
            best_moves(&board, Side::Cross, SearchDepth::Unbounded),
            vec![mv(0, 2)]
        );
    }

    #[test]
    fn test_scores_from_noughts_perspective() {
        // O to move can win at (1,2).
        let board = Board::from_grid([[1, 1, -1], [-1, -1, 0], [1, 0, 0]]).unwrap();
        let scored = score_moves(&board, Side::Nought, SearchDepth::Unbounded);
        let win = scored.iter().find(|&&(m, _)| m == mv(1, 2)).unwrap();
        assert_eq!(win.1, 9);
    }

    #[test]
    fn test_center_reply_to_corner_opening() {
        let mut board = Board::new();
        board.place(mv(0, 0), Side::Cross);
        assert_eq!(
            best_moves(&board, Side::Nought, SearchDepth::Unbounded),
            vec![Move::CENTER]
        );
    }

    #[test]
    fn test_player_proposes_legal_move() {
        let board = Board::from_grid([[1, -1, 1], [0, -1, 0], [0, 1, 0]]).unwrap();
        let mut player = MinimaxPlayer::seeded(SearchDepth::Unbounded, 3);
        match player.propose(&board, Side::Cross) {
            Proposal::Play(choice) => assert!(board.is_empty(choice)),
            other => panic!("expected a move, got {other:?}"),
        }
    }
}
