//! The 3×3 board and its move counter.

use crate::types::{Cell, Move, Side};
use serde::Serialize;

/// 3×3 tic-tac-toe board.
///
/// `move_count` always equals the number of marked cells. The board has value
/// semantics: [`Board::snapshot`] (or `clone`) yields an independent copy that
/// search code may mutate freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
    move_count: u8,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from numeric cell values (`0`, `1` for crosses, `-1` for noughts).
    ///
    /// Returns `None` if any value is outside that set.
    pub fn from_grid(grid: [[i8; 3]; 3]) -> Option<Self> {
        let mut board = Self::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_value(value)?;
                board.cells[row][col] = cell;
                if !cell.is_empty() {
                    board.move_count += 1;
                }
            }
        }
        Some(board)
    }

    /// Places `side`'s mark at `mv`.
    ///
    /// The caller guarantees the cell is empty; the turn controller checks this
    /// before every commit.
    pub fn place(&mut self, mv: Move, side: Side) {
        debug_assert!(self.is_empty(mv), "place() on occupied cell {mv}");
        self.cells[mv.row()][mv.col()] = Cell::Marked(side);
        self.move_count += 1;
    }

    /// Returns the cell at `mv`.
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Returns true if nobody has played at `mv`.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv).is_empty()
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.move_count as usize
    }

    /// True once all nine cells are marked.
    pub fn is_full(&self) -> bool {
        self.move_count == 9
    }

    /// An independent copy for search and inspection.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.is_empty(mv))
    }

    /// Sum of the numeric cell values along `cells`.
    ///
    /// A line is owned outright by one side exactly when the absolute sum is 3.
    pub fn line_sum(&self, cells: &[Move; 3]) -> i8 {
        cells.iter().map(|&mv| self.get(mv).value()).sum()
    }

    /// Numeric view of the board, row by row.
    pub fn to_grid(&self) -> [[i8; 3]; 3] {
        self.cells.map(|row| row.map(Cell::value))
    }

    /// Formats the board as three rows of `X`, `O` and `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                result.push(cell.side().map_or('.', Side::symbol));
                if col < 2 {
                    result.push(' ');
                }
            }
            if row < 2 {
                result.push('\n');
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.move_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_place_updates_cell_and_count() {
        let mut board = Board::new();
        board.place(Move::CENTER, Side::Cross);
        assert_eq!(board.get(Move::CENTER), Cell::Marked(Side::Cross));
        assert_eq!(board.move_count(), 1);
        assert!(!board.empty_cells().any(|mv| mv == Move::CENTER));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::new();
        board.place(Move::CENTER, Side::Cross);
        let mut copy = board.snapshot();
        copy.place(Move::new(0, 0).unwrap(), Side::Nought);
        assert_eq!(board.move_count(), 1);
        assert!(board.is_empty(Move::new(0, 0).unwrap()));
        assert_eq!(copy.move_count(), 2);
    }

    #[test]
    fn test_from_grid_counts_marks() {
        let board = Board::from_grid([[1, 0, 0], [0, -1, 0], [0, 0, 1]]).unwrap();
        assert_eq!(board.move_count(), 3);
        assert_eq!(board.to_grid(), [[1, 0, 0], [0, -1, 0], [0, 0, 1]]);
        assert!(Board::from_grid([[2, 0, 0], [0, 0, 0], [0, 0, 0]]).is_none());
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_grid([[1, -1, 1], [1, -1, -1], [-1, 1, 1]]).unwrap();
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_display() {
        let board = Board::from_grid([[1, 0, 0], [0, -1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(board.display(), "X . .\n. O .\n. . .");
    }
}
