//! Win and draw detection over the whole game tree.

use chalkboard_tictactoe::rules::{is_draw, outcome_after, winner_at, winner_global, winning_line};
use chalkboard_tictactoe::{Board, Diagonal, GameOutcome, GameRecord, Move, Side, WinLine};

fn mv(row: usize, col: usize) -> Move {
    Move::new(row, col).unwrap()
}

/// Walks every legal game, checking incremental and global detection agree
/// after each move. Returns (x wins, o wins, draws).
fn walk(board: &Board, side: Side, tally: &mut (usize, usize, usize)) {
    for position in board.empty_cells() {
        let mut child = board.clone();
        child.place(position, side);

        let incremental = winner_at(&child, position);
        let global = winner_global(&child);
        assert_eq!(incremental.is_some(), global.is_some(), "\n{child}");
        if incremental.is_some() {
            assert_eq!(global, Some(side));
        }

        let full_without_winner = child.move_count() == 9 && global.is_none();
        assert_eq!(is_draw(&child), full_without_winner, "\n{child}");

        match outcome_after(&child, position, side) {
            GameOutcome::Win { side: winner, line } => {
                assert_eq!(winner, side);
                assert!(line.contains(position));
                match side {
                    Side::Cross => tally.0 += 1,
                    Side::Nought => tally.1 += 1,
                }
            }
            GameOutcome::Draw => tally.2 += 1,
            GameOutcome::Ongoing => walk(&child, side.opponent(), tally),
        }
    }
}

#[test]
fn test_game_tree_detection_agrees() {
    let mut tally = (0, 0, 0);
    walk(&Board::new(), Side::Cross, &mut tally);
    // 255168 complete games.
    assert_eq!(tally, (131184, 77904, 46080));
}

#[test]
fn test_incremental_check_only_sees_lines_through_last_move() {
    // Row 0 is complete, but the last move was elsewhere.
    let board = Board::from_grid([[1, 1, 1], [-1, -1, 0], [0, 0, 0]]).unwrap();
    assert_eq!(winner_at(&board, mv(1, 1)), None);
    assert_eq!(winner_at(&board, mv(0, 2)), Some(WinLine::Row(0)));
}

#[test]
fn test_double_line_reports_diagonal_first() {
    // The last move at (0,0) completes row 0 and the main diagonal.
    let record = GameRecord::replay(&[
        mv(0, 1),
        mv(1, 0),
        mv(0, 2),
        mv(2, 1),
        mv(1, 1),
        mv(1, 2),
        mv(2, 2),
        mv(2, 0),
        mv(0, 0),
    ])
    .unwrap();
    let outcome = outcome_after(record.board(), mv(0, 0), Side::Cross);
    assert_eq!(
        outcome,
        GameOutcome::Win {
            side: Side::Cross,
            line: WinLine::Diagonal(Diagonal::Main),
        }
    );
    assert_eq!(
        winning_line(record.board()),
        Some((Side::Cross, WinLine::Diagonal(Diagonal::Main)))
    );
}

#[test]
fn test_win_on_last_cell_is_not_a_draw() {
    let record = GameRecord::replay(&[
        mv(0, 0),
        mv(0, 1),
        mv(0, 2),
        mv(1, 1),
        mv(1, 0),
        mv(1, 2),
        mv(2, 1),
        mv(2, 2),
        mv(2, 0),
    ])
    .unwrap();
    assert!(record.board().is_full());
    assert!(!is_draw(record.board()));
    assert_eq!(
        outcome_after(record.board(), mv(2, 0), Side::Cross),
        GameOutcome::Win {
            side: Side::Cross,
            line: WinLine::Column(0),
        }
    );
}
