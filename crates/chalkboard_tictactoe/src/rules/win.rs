//! Win detection for tic-tac-toe.

use crate::board::Board;
use crate::outcome::{Diagonal, WinLine};
use crate::types::{Move, Side};

/// Returns the owner of `line` if all three cells hold the same mark.
pub fn line_owner(board: &Board, line: WinLine) -> Option<Side> {
    match board.line_sum(&line.cells()) {
        3 => Some(Side::Cross),
        -3 => Some(Side::Nought),
        _ => None,
    }
}

/// Checks only the lines passing through `last`.
///
/// Order: main diagonal (if `last` is on it), anti-diagonal (if on it), the
/// row of `last`, then its column. The first complete line is returned, so
/// diagonals win ties against rows and columns, and the main diagonal wins
/// against the anti-diagonal.
pub fn winner_at(board: &Board, last: Move) -> Option<WinLine> {
    let mut candidates = [None; 4];
    if last.on_main_diagonal() {
        candidates[0] = Some(WinLine::Diagonal(Diagonal::Main));
    }
    if last.on_anti_diagonal() {
        candidates[1] = Some(WinLine::Diagonal(Diagonal::Anti));
    }
    candidates[2] = Some(WinLine::Row(last.row()));
    candidates[3] = Some(WinLine::Column(last.col()));

    candidates
        .into_iter()
        .flatten()
        .find(|&line| line_owner(board, line).is_some())
}

/// Scans the whole board and returns the first complete line with its owner.
///
/// Lines are visited in [`WinLine::ALL`] order.
pub fn winning_line(board: &Board) -> Option<(Side, WinLine)> {
    WinLine::ALL
        .into_iter()
        .find_map(|line| line_owner(board, line).map(|side| (side, line)))
}

/// Full-board winner check, for callers that do not know the last move.
pub fn winner_global(board: &Board) -> Option<Side> {
    winning_line(board).map(|(side, _)| side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner_global(&board), None);
        assert_eq!(winner_at(&board, Move::CENTER), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_grid([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(winner_global(&board), Some(Side::Cross));
        assert_eq!(winner_at(&board, mv(0, 1)), Some(WinLine::Row(0)));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_grid([[1, -1, 1], [0, -1, 0], [1, -1, 0]]).unwrap();
        assert_eq!(winner_at(&board, mv(2, 1)), Some(WinLine::Column(1)));
        assert_eq!(winning_line(&board), Some((Side::Nought, WinLine::Column(1))));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = Board::from_grid([[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        assert_eq!(
            winner_at(&board, mv(2, 2)),
            Some(WinLine::Diagonal(Diagonal::Main))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_grid([[1, 1, -1], [0, -1, 0], [-1, 0, 1]]).unwrap();
        assert_eq!(
            winner_at(&board, mv(2, 0)),
            Some(WinLine::Diagonal(Diagonal::Anti))
        );
    }

    #[test]
    fn test_winner_at_ignores_lines_not_through_last_move() {
        let board = Board::from_grid([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(winner_at(&board, mv(1, 0)), None);
    }

    #[test]
    fn test_diagonal_reported_before_row() {
        // Corner completes both the main diagonal and the bottom row.
        let board = Board::from_grid([[1, -1, -1], [-1, 1, 0], [1, 1, 1]]).unwrap();
        assert_eq!(
            winner_at(&board, mv(2, 2)),
            Some(WinLine::Diagonal(Diagonal::Main))
        );
        assert_eq!(
            winning_line(&board),
            Some((Side::Cross, WinLine::Diagonal(Diagonal::Main)))
        );
    }

    #[test]
    fn test_main_diagonal_reported_before_anti() {
        let board = Board::from_grid([[1, -1, 1], [-1, 1, -1], [1, -1, 1]]).unwrap();
        assert_eq!(
            winner_at(&board, Move::CENTER),
            Some(WinLine::Diagonal(Diagonal::Main))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_grid([[1, 1, 0], [0, -1, 0], [0, 0, -1]]).unwrap();
        assert_eq!(winner_global(&board), None);
    }
}
