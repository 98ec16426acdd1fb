//! Winning lines and game outcomes.
//!
//! These are the symbolic results handed to the presentation layer: enough to
//! draw the winning stroke or the draw message, nothing about how.

use crate::types::{Move, Side};
use serde::{Deserialize, Serialize};

/// One of the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Diagonal {
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    Main,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    Anti,
}

/// A line of three cells that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum WinLine {
    /// Row `0..3`.
    #[display("row {_0}")]
    Row(usize),
    /// Column `0..3`.
    #[display("column {_0}")]
    Column(usize),
    /// A diagonal.
    #[display("{_0}")]
    Diagonal(Diagonal),
}

impl WinLine {
    /// All eight lines in rule-engine priority order: diagonals (main first),
    /// then rows, then columns.
    pub const ALL: [WinLine; 8] = [
        WinLine::Diagonal(Diagonal::Main),
        WinLine::Diagonal(Diagonal::Anti),
        WinLine::Row(0),
        WinLine::Row(1),
        WinLine::Row(2),
        WinLine::Column(0),
        WinLine::Column(1),
        WinLine::Column(2),
    ];

    /// The three cells of the line, ordered from one end to the other.
    pub fn cells(self) -> [Move; 3] {
        let at = |row: usize, col: usize| Move::ALL[row * 3 + col];
        match self {
            WinLine::Row(row) => [at(row, 0), at(row, 1), at(row, 2)],
            WinLine::Column(col) => [at(0, col), at(1, col), at(2, col)],
            WinLine::Diagonal(Diagonal::Main) => [at(0, 0), at(1, 1), at(2, 2)],
            WinLine::Diagonal(Diagonal::Anti) => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }

    /// Start and end cells, for drawing the winning stroke.
    pub fn endpoints(self) -> (Move, Move) {
        let [start, _, end] = self.cells();
        (start, end)
    }

    /// True if `mv` is one of the line's cells.
    pub fn contains(self, mv: Move) -> bool {
        self.cells().contains(&mv)
    }
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameOutcome {
    /// The game continues.
    Ongoing,
    /// Board full, nobody won.
    Draw,
    /// `side` completed `line`.
    Win {
        /// The winning side.
        side: Side,
        /// The completed line.
        line: WinLine,
    },
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Win { side, .. } => Some(*side),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            GameOutcome::Win { line, .. } => Some(*line),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }

    /// Returns true for `Draw` and `Win`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Game continues"),
            GameOutcome::Draw => write!(f, "Draw"),
            GameOutcome::Win { side, line } => write!(f, "{side} wins on the {line}"),
        }
    }
}
