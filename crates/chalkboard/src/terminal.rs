//! Terminal presentation: renders controller events and reads moves.

use crate::cli::EventFormat;
use anyhow::{Context, Result, bail};
use chalkboard_tictactoe::{Board, GameEvent, GameObserver, Move, Side};
use std::io::{self, Write};
use tracing::warn;

/// Writes game events to `out`, as text or as JSON lines.
///
/// Text output keeps a mirror of the board built from `MoveCommitted`
/// events so it can redraw after each move. Write failures are kept and
/// surfaced through [`Renderer::take_error`].
#[derive(Debug)]
pub struct Renderer<W: Write> {
    format: EventFormat,
    out: W,
    board: Board,
    error: Option<io::Error>,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(format: EventFormat, out: W) -> Self {
        Self {
            format,
            out,
            board: Board::new(),
            error: None,
        }
    }

    /// Returns the first write error since the last call, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Forgets the mirrored board, for a game abandoned midway.
    pub fn reset(&mut self) {
        self.board = Board::new();
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match self.format {
            EventFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
            EventFormat::Text => self.render_text(event)?,
        }
        self.out.flush()
    }

    fn render_text(&mut self, event: &GameEvent) -> io::Result<()> {
        match *event {
            GameEvent::TurnStarted { side } => {
                if self.board.move_count() == 0 {
                    writeln!(self.out, "{}\n", self.board)?;
                }
                writeln!(self.out, "{} ({}) to move.", side, side.symbol())
            }
            GameEvent::MoveCommitted {
                side,
                position,
                outcome,
            } => {
                self.board.place(position, side);
                writeln!(self.out, "{side} plays {position}\n{}\n", self.board)?;
                if outcome.is_terminal() {
                    self.board = Board::new();
                    writeln!(self.out, "{outcome}.")?;
                }
                Ok(())
            }
        }
    }
}

impl<W: Write> GameObserver for Renderer<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to render event");
            self.error.get_or_insert(e);
        }
    }
}

/// What the user typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Play(Move),
    /// Abandon the current game and start over.
    Restart,
    /// Leave.
    Quit,
}

/// Parses `row col` (space or comma separated), `restart` or `quit`.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "restart" => return Ok(Command::Restart),
        _ => {}
    }

    let parts: Vec<_> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        bail!("expected 'row col', got '{line}'");
    };
    let row: usize = row.parse().with_context(|| format!("bad row '{row}'"))?;
    let col: usize = col.parse().with_context(|| format!("bad column '{col}'"))?;
    Ok(Command::Play(Move::new(row, col)?))
}

/// Prompt written before reading a human move.
pub fn prompt(side: Side) -> String {
    format!("{side} move (row col, 'restart' or 'quit'): ")
}
