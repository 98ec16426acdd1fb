//! Computer-vs-computer matches.

use anyhow::{Context, Result, bail};
use chalkboard_tictactoe::{GameConfig, GameOutcome, NullObserver, PlayerKind, Side, TurnController};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a self-play run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games won by crosses.
    pub cross_wins: u32,
    /// Games won by noughts.
    pub nought_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome.winner() {
            Some(Side::Cross) => self.cross_wins += 1,
            Some(Side::Nought) => self.nought_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: Cross won {}, Nought won {}, {} drawn",
            self.games, self.cross_wins, self.nought_wins, self.draws
        )
    }
}

/// Plays `games` games between the two configured computer players.
///
/// With a seed, game `i` is seeded with `seed + i` so the whole run is
/// reproducible while games still differ.
#[instrument(skip(config), fields(cross = ?config.cross(), nought = ?config.nought()))]
pub fn run(config: &GameConfig, games: u32) -> Result<Tally> {
    let (cross, nought) = config.validate()?;
    if cross == PlayerKind::Human || nought == PlayerKind::Human {
        bail!("self-play needs two computer players, got {cross} vs {nought}");
    }

    let mut tally = Tally::default();
    for index in 0..games {
        let game_config = match config.seed() {
            Some(seed) => config.clone().with_seed(seed.wrapping_add(u64::from(index))),
            None => config.clone(),
        };
        let mut game = TurnController::from_config(&game_config, NullObserver)?;
        let outcome = game
            .start()?
            .outcome()
            .with_context(|| format!("game {index} stopped before it finished"))?;
        debug!(game = index, %outcome, moves = game.history().len(), "Self-play game finished");
        tally.record(outcome);
    }

    info!(%tally, "Self-play complete");
    Ok(tally)
}
