//! Command-line interface for chalkboard.

use anyhow::Context;
use chalkboard_tictactoe::{GameConfig, PlayerKind};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Chalkboard - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "chalkboard")]
#[command(about = "Tic-tac-toe against humans, random players and minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one game, reading human moves from stdin as "row col"
    Play {
        /// Who plays which side
        #[command(flatten)]
        players: PlayerArgs,

        /// How events are written to stdout
        #[arg(long, value_enum, default_value_t = EventFormat::Text)]
        events: EventFormat,
    },

    /// Play computer players against each other and report the tally
    Selfplay {
        /// Who plays which side (humans are not allowed here)
        #[command(flatten)]
        players: PlayerArgs,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// How the tally is written to stdout
        #[arg(long, value_enum, default_value_t = EventFormat::Text)]
        events: EventFormat,
    },
}

/// Player selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayerArgs {
    /// TOML game configuration; flags given on the command line override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Player for crosses: human, random, minimax or minimax:<easy|medium|hard>
    #[arg(long)]
    pub cross: Option<PlayerKind>,

    /// Player for noughts
    #[arg(long)]
    pub nought: Option<PlayerKind>,

    /// Seed for computer tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Output format for game events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventFormat {
    /// Board drawn as text after every move
    Text,
    /// One JSON object per line
    Json,
}

impl PlayerArgs {
    /// Builds the game configuration: file first, then flags, then defaults
    /// for sides still unassigned.
    pub fn resolve(
        &self,
        default_cross: PlayerKind,
        default_nought: PlayerKind,
    ) -> anyhow::Result<GameConfig> {
        let file = match &self.config {
            Some(path) => GameConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };

        let cross = self.cross.or(*file.cross()).unwrap_or(default_cross);
        let nought = self.nought.or(*file.nought()).unwrap_or(default_nought);
        let config = GameConfig::new(cross, nought);
        Ok(match self.seed.or(*file.seed()) {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }
}
