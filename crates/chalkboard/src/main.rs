//! Chalkboard - terminal tic-tac-toe
//!
//! Drives the `chalkboard_tictactoe` core from a terminal: human moves come
//! from stdin, events go to stdout, logs go to stderr.

#![warn(missing_docs)]

mod cli;
mod selfplay;
mod terminal;

use anyhow::{Context, Result, bail};
use chalkboard_tictactoe::{Difficulty, GameConfig, PlayerKind, TurnController, TurnState};
use clap::Parser;
use cli::{Cli, Command, EventFormat};
use std::io::{self, BufRead, Write};
use terminal::Renderer;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

const HARD: PlayerKind = PlayerKind::Minimax {
    difficulty: Difficulty::Hard,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { players, events } => {
            let config = players.resolve(PlayerKind::Human, HARD)?;
            run_play(&config, events)
        }
        Command::Selfplay {
            players,
            games,
            events,
        } => {
            let config = players.resolve(HARD, HARD)?;
            run_selfplay(&config, games, events)
        }
    }
}

/// Play one interactive game, with restarts, until it ends or input closes.
#[instrument(skip_all)]
fn run_play(config: &GameConfig, format: EventFormat) -> Result<()> {
    let mut game = TurnController::from_config(config, Renderer::new(format, io::stdout()))?;
    let mut input = io::stdin().lock().lines();
    let mut state = game.start()?;

    loop {
        if let Some(e) = game.observer_mut().take_error() {
            return Err(e).context("writing to stdout");
        }

        let side = match state {
            TurnState::WaitingForMove(side) => side,
            TurnState::GameOver(outcome) => {
                info!(%outcome, moves = game.history().len(), "Game finished");
                return Ok(());
            }
            TurnState::NotStarted | TurnState::Evaluating => {
                bail!("controller returned control in state {state:?}")
            }
        };

        eprint!("{}", terminal::prompt(side));
        io::stderr().flush().context("writing prompt")?;

        let Some(line) = input.next() else {
            info!("Input closed before the game ended");
            return Ok(());
        };
        let line = line.context("reading move")?;

        match terminal::parse_command(&line) {
            Ok(terminal::Command::Play(position)) => match game.submit(position) {
                Ok(_) => state = game.state(),
                Err(e) if e.is_recoverable() => eprintln!("{e}"),
                Err(e) => return Err(e.into()),
            },
            Ok(terminal::Command::Restart) => {
                game.observer_mut().reset();
                state = game.restart()?;
            }
            Ok(terminal::Command::Quit) => {
                info!("Quit");
                return Ok(());
            }
            Err(e) => eprintln!("{e:#}"),
        }
    }
}

/// Run a self-play match and print the tally.
#[instrument(skip(config))]
fn run_selfplay(config: &GameConfig, games: u32, format: EventFormat) -> Result<()> {
    let tally = selfplay::run(config, games)?;
    match format {
        EventFormat::Text => println!("{tally}"),
        EventFormat::Json => println!("{}", serde_json::to_string(&tally)?),
    }
    Ok(())
}
