//! Core domain types for tic-tac-toe: sides, cells and moves.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side of the board a player controls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Crosses, always moves first. Numeric value `+1`.
    #[display("Cross")]
    Cross,
    /// Noughts. Numeric value `-1`.
    #[display("Nought")]
    Nought,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Cross => Side::Nought,
            Side::Nought => Side::Cross,
        }
    }

    /// Numeric mark value: `+1` for crosses, `-1` for noughts.
    pub fn value(self) -> i8 {
        match self {
            Side::Cross => 1,
            Side::Nought => -1,
        }
    }

    /// Symbol used when rendering the board as text.
    pub fn symbol(self) -> char {
        match self {
            Side::Cross => 'X',
            Side::Nought => 'O',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a side's mark.
    Marked(Side),
}

impl Cell {
    /// Numeric value of the cell (`0`, `+1` or `-1`).
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Marked(side) => side.value(),
        }
    }

    /// Decodes a numeric cell value. Anything other than `0`, `1`, `-1` is rejected.
    pub fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Marked(Side::Cross)),
            -1 => Some(Cell::Marked(Side::Nought)),
            _ => None,
        }
    }

    /// The side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Marked(side) => Some(side),
        }
    }

    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate, `(row, col)` with both in `0..3`.
///
/// Out-of-range coordinates cannot be represented; [`Move::new`] rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// The center cell, `(1, 1)`.
    pub const CENTER: Move = Move::at(1, 1);

    /// All nine cells in row-major order.
    pub const ALL: [Move; 9] = [
        Move::at(0, 0),
        Move::at(0, 1),
        Move::at(0, 2),
        Move::at(1, 0),
        Move::at(1, 1),
        Move::at(1, 2),
        Move::at(2, 0),
        Move::at(2, 1),
        Move::at(2, 2),
    ];

    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Creates a move at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside `0..3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row >= 3 || col >= 3 {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(Self::at(row as u8, col as u8))
    }

    /// Creates a move from a row-major cell index (`0..9`).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major cell index (`0..9`).
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }

    /// Row, `0..3`.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column, `0..3`.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// True if the cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True if the cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
