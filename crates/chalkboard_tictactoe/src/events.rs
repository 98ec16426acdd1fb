//! Notifications from the turn controller to the presentation layer.

use crate::outcome::GameOutcome;
use crate::types::{Move, Side};
use serde::Serialize;

/// Messages sent from the controller to whoever renders the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new turn began; `side` is to move.
    TurnStarted {
        /// Side now to move.
        side: Side,
    },
    /// A move was committed and evaluated.
    MoveCommitted {
        /// Side that moved.
        side: Side,
        /// Cell that was marked.
        position: Move,
        /// Result of the move: continue, win with line, or draw.
        outcome: GameOutcome,
    },
}

/// Receives [`GameEvent`]s synchronously, in order, as the game advances.
pub trait GameObserver {
    /// Called once per event.
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records events, mostly useful in tests.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
