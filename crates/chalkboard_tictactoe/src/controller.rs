//! Turn controller: the game state machine.
//!
//! The controller owns the live board, asks the side to move for a proposal,
//! commits legal moves, evaluates them with the rules module and reports the
//! result to a [`GameObserver`]. Computer turns run synchronously; a human
//! turn returns control to the caller until [`TurnController::submit`] is
//! called with the next input event.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{GameError, MoveError};
use crate::events::{GameEvent, GameObserver};
use crate::invariants::{InvariantSet, RecordInvariants};
use crate::outcome::GameOutcome;
use crate::players::{Player, Proposal};
use crate::record::{GameRecord, Placement};
use crate::rules;
use crate::types::{Move, Side};
use tracing::{debug, error, info, instrument, warn};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Created but not yet started; nothing has been announced.
    NotStarted,
    /// `side` is to move.
    WaitingForMove(Side),
    /// A move was committed and is being checked against the rules.
    Evaluating,
    /// The game has ended. Terminal.
    GameOver(GameOutcome),
}

impl TurnState {
    /// The side to move, if the game is waiting for one.
    pub fn to_move(&self) -> Option<Side> {
        match self {
            TurnState::WaitingForMove(side) => Some(*side),
            TurnState::NotStarted | TurnState::Evaluating | TurnState::GameOver(_) => None,
        }
    }

    /// The final outcome, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            TurnState::GameOver(outcome) => Some(*outcome),
            TurnState::NotStarted | TurnState::WaitingForMove(_) | TurnState::Evaluating => None,
        }
    }

    /// Returns true once the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, TurnState::GameOver(_))
    }
}

/// Drives one game between two players.
pub struct TurnController<O: GameObserver> {
    record: GameRecord,
    cross: Box<dyn Player>,
    nought: Box<dyn Player>,
    state: TurnState,
    observer: O,
}

impl<O: GameObserver> std::fmt::Debug for TurnController<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurnController")
            .field("record", &self.record)
            .field("cross", &self.cross)
            .field("nought", &self.nought)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<O: GameObserver> TurnController<O> {
    /// Creates a controller for a fresh game. Crosses move first.
    ///
    /// The controller stays in [`TurnState::NotStarted`] and announces
    /// nothing until [`start`](Self::start) is called.
    pub fn new(cross: Box<dyn Player>, nought: Box<dyn Player>, observer: O) -> Self {
        info!(cross = cross.name(), nought = nought.name(), "New game");
        Self {
            record: GameRecord::new(),
            cross,
            nought,
            state: TurnState::NotStarted,
            observer,
        }
    }

    /// Creates a controller from a configuration.
    ///
    /// # Errors
    ///
    /// Fails with [`GameError::Config`] if either side has no player. The
    /// board is never touched in that case.
    #[instrument(skip(observer))]
    pub fn from_config(config: &GameConfig, observer: O) -> Result<Self, GameError> {
        let (cross, nought) = config.build_players()?;
        Ok(Self::new(cross, nought, observer))
    }

    /// Announces the first turn and plays any leading computer turns.
    ///
    /// Only the first call has an effect; later calls return the current
    /// state without emitting events.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<TurnState, GameError> {
        if self.state != TurnState::NotStarted {
            debug!(state = ?self.state, "Game already started");
            return Ok(self.state);
        }
        self.state = TurnState::WaitingForMove(Side::Cross);
        self.observer.on_event(&GameEvent::TurnStarted { side: Side::Cross });
        self.advance()
    }

    /// Plays computer turns until a human must move or the game ends.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotStarted`] before [`start`](Self::start).
    /// Returns [`GameError::ComputerFault`] if a computer player proposes an
    /// occupied cell, no cell at all, or waits for input it never takes. The
    /// board is left untouched.
    pub fn advance(&mut self) -> Result<TurnState, GameError> {
        if self.state == TurnState::NotStarted {
            return Err(MoveError::NotStarted.into());
        }

        while let TurnState::WaitingForMove(side) = self.state {
            let snapshot = self.record.board().snapshot();
            let player = self.player_mut(side);
            let proposal = player.propose(&snapshot, side);

            let position = match proposal {
                Proposal::AwaitInput if player.takes_input() => {
                    debug!(%side, "Waiting for input");
                    break;
                }
                Proposal::AwaitInput => {
                    error!(%side, "Computer player asked for input");
                    return Err(GameError::ComputerFault {
                        side,
                        detail: "waited for input it does not take".to_string(),
                    });
                }
                Proposal::Play(position) => position,
                Proposal::NoMove => {
                    error!(%side, "Computer player found no move on a live board");
                    return Err(GameError::ComputerFault {
                        side,
                        detail: "no move proposed".to_string(),
                    });
                }
            };

            if !self.record.board().is_empty(position) {
                error!(%side, %position, "Computer player proposed an occupied cell");
                return Err(GameError::ComputerFault {
                    side,
                    detail: format!("proposed occupied cell {position}"),
                });
            }

            self.commit(side, position);
        }
        Ok(self.state)
    }

    /// Feeds a move from external input (a human player).
    ///
    /// On success returns the outcome of this move; any computer replies are
    /// played before returning and reported through the observer.
    ///
    /// # Errors
    ///
    /// [`MoveError`] variants are recoverable: the board, state and observer
    /// are untouched and the same side may try again.
    #[instrument(skip(self))]
    pub fn submit(&mut self, position: Move) -> Result<GameOutcome, GameError> {
        let side = match self.state {
            TurnState::WaitingForMove(side) => side,
            TurnState::NotStarted => return Err(MoveError::NotStarted.into()),
            TurnState::GameOver(_) => return Err(MoveError::GameOver.into()),
            TurnState::Evaluating => {
                unreachable!("commit always leaves Evaluating before returning")
            }
        };

        if !self.player(side).takes_input() {
            warn!(%side, "Input received while a computer player is to move");
            return Err(MoveError::NotAwaitingInput(side).into());
        }

        if !self.record.board().is_empty(position) {
            warn!(%side, %position, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(position).into());
        }

        let outcome = self.commit(side, position);
        self.advance()?;
        Ok(outcome)
    }

    /// Starts a new game with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<TurnState, GameError> {
        info!("Restarting game");
        self.record = GameRecord::new();
        self.state = TurnState::NotStarted;
        self.start()
    }

    /// Commits a validated move and evaluates it.
    fn commit(&mut self, side: Side, position: Move) -> GameOutcome {
        self.record.commit(Placement::new(side, position));
        self.state = TurnState::Evaluating;

        if cfg!(debug_assertions) {
            if let Err(violations) = RecordInvariants::check_all(&self.record) {
                let descriptions: Vec<_> = violations.iter().map(ToString::to_string).collect();
                panic!("Invariant violation: {}", descriptions.join("; "));
            }
        }

        let outcome = rules::outcome_after(self.record.board(), position, side);
        debug!(%side, %position, %outcome, "Move committed");

        self.state = match outcome {
            GameOutcome::Ongoing => TurnState::WaitingForMove(side.opponent()),
            terminal => {
                info!(outcome = %terminal, moves = self.record.history().len(), "Game over");
                TurnState::GameOver(terminal)
            }
        };

        self.observer.on_event(&GameEvent::MoveCommitted {
            side,
            position,
            outcome,
        });
        if let TurnState::WaitingForMove(next) = self.state {
            self.observer.on_event(&GameEvent::TurnStarted { side: next });
        }
        outcome
    }

    fn player(&self, side: Side) -> &dyn Player {
        match side {
            Side::Cross => self.cross.as_ref(),
            Side::Nought => self.nought.as_ref(),
        }
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::Cross => self.cross.as_mut(),
            Side::Nought => self.nought.as_mut(),
        }
    }

    /// Current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        self.record.board()
    }

    /// Moves committed so far, in order.
    pub fn history(&self) -> &[Placement] {
        self.record.history()
    }

    /// Board and history together.
    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    /// Final outcome, once the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Name of the player controlling `side`.
    pub fn player_name(&self, side: Side) -> &str {
        self.player(side).name()
    }

    /// True if `side` is played through external input.
    pub fn is_human(&self, side: Side) -> bool {
        self.player(side).takes_input()
    }

    /// The observer receiving events.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, for presentation state kept outside
    /// the event stream.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the controller and returns its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
