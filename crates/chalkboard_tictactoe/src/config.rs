//! Game configuration: which kind of player controls each side.

use crate::error::ConfigError;
use crate::players::{HumanPlayer, MinimaxPlayer, Player, RandomPlayer, SearchDepth};
use crate::types::Side;
use derive_getters::Getters;
use derive_setters::Setters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

const EASY_PLIES: NonZeroU8 = NonZeroU8::MIN;
const MEDIUM_PLIES: NonZeroU8 = match NonZeroU8::new(2) {
    Some(plies) => plies,
    None => unreachable!(),
};

/// Three-level difficulty selector for the minimax player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Looks one ply ahead: takes a win if one is on the board.
    Easy,
    /// Looks two plies ahead: also blocks the opponent's immediate win.
    Medium,
    /// Searches to the end of the game.
    #[default]
    Hard,
}

impl Difficulty {
    /// Search depth this level maps to: 1, 2 or unbounded.
    pub fn depth(self) -> SearchDepth {
        match self {
            Difficulty::Easy => SearchDepth::Limited(EASY_PLIES),
            Difficulty::Medium => SearchDepth::Limited(MEDIUM_PLIES),
            Difficulty::Hard => SearchDepth::Unbounded,
        }
    }
}

/// Kind of player assigned to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves arrive as input events.
    Human,
    /// Uniformly random empty cell.
    Random,
    /// Minimax search at the given difficulty.
    Minimax {
        /// Search depth level.
        #[serde(default)]
        difficulty: Difficulty,
    },
}

impl PlayerKind {
    /// Builds the player. Computer players draw tie-breaks from `rng`.
    #[instrument(skip(rng))]
    pub fn build(self, rng: StdRng) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanPlayer::default()),
            PlayerKind::Random => Box::new(RandomPlayer::new(rng)),
            PlayerKind::Minimax { difficulty } => {
                Box::new(MinimaxPlayer::new(difficulty.depth(), rng))
            }
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Minimax { difficulty } => write!(f, "minimax:{difficulty}"),
        }
    }
}

impl FromStr for PlayerKind {
    type Err = ConfigError;

    /// Parses `human`, `random`, `minimax` or `minimax:<easy|medium|hard>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        let (kind, level) = match s.split_once(':') {
            Some((kind, level)) => (kind, Some(level)),
            None => (s.as_str(), None),
        };

        match (kind, level) {
            ("human", None) => Ok(PlayerKind::Human),
            ("random", None) => Ok(PlayerKind::Random),
            ("minimax", None) => Ok(PlayerKind::Minimax {
                difficulty: Difficulty::default(),
            }),
            ("minimax", Some(level)) => {
                let difficulty = Difficulty::from_str(level).map_err(|_| {
                    ConfigError::new(format!("Unknown difficulty '{level}' (easy, medium, hard)"))
                })?;
                Ok(PlayerKind::Minimax { difficulty })
            }
            _ => Err(ConfigError::new(format!(
                "Unknown player type '{s}' (human, random, minimax[:easy|medium|hard])"
            ))),
        }
    }
}

/// Configuration for one game. Immutable once the game starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(strip_option, prefix = "with_")]
pub struct GameConfig {
    /// Player for crosses.
    #[serde(default)]
    cross: Option<PlayerKind>,

    /// Player for noughts.
    #[serde(default)]
    nought: Option<PlayerKind>,

    /// Seed for computer players. Unseeded games draw from the OS.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration with both sides assigned.
    #[instrument]
    pub fn new(cross: PlayerKind, nought: PlayerKind) -> Self {
        Self {
            cross: Some(cross),
            nought: Some(nought),
            seed: None,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading game config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(cross = ?config.cross, nought = ?config.nought, "Game config loaded");
        Ok(config)
    }

    /// Player kind for `side`, if assigned.
    pub fn kind_for(&self, side: Side) -> Option<PlayerKind> {
        match side {
            Side::Cross => self.cross,
            Side::Nought => self.nought,
        }
    }

    /// Checks that both sides have a player.
    pub fn validate(&self) -> Result<(PlayerKind, PlayerKind), ConfigError> {
        match (self.cross, self.nought) {
            (Some(cross), Some(nought)) => Ok((cross, nought)),
            (None, None) => Err(ConfigError::new("No player configured for either side")),
            (None, Some(_)) => Err(ConfigError::new("No player configured for Cross")),
            (Some(_), None) => Err(ConfigError::new("No player configured for Nought")),
        }
    }

    /// Random generator for `side`'s computer player.
    ///
    /// Seeded games give each side its own stream so that both computer
    /// players do not mirror each other's tie-breaks.
    pub fn rng_for(&self, side: Side) -> StdRng {
        match self.seed {
            Some(seed) => {
                let stream = match side {
                    Side::Cross => 0,
                    Side::Nought => 1,
                };
                StdRng::seed_from_u64(seed.wrapping_mul(2).wrapping_add(stream))
            }
            None => StdRng::from_os_rng(),
        }
    }

    /// Validates the configuration and builds both players.
    #[instrument(skip(self))]
    pub fn build_players(&self) -> Result<(Box<dyn Player>, Box<dyn Player>), ConfigError> {
        let (cross, nought) = self.validate()?;
        Ok((
            cross.build(self.rng_for(Side::Cross)),
            nought.build(self.rng_for(Side::Nought)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), SearchDepth::limited(1).unwrap());
        assert_eq!(Difficulty::Medium.depth(), SearchDepth::limited(2).unwrap());
        assert_eq!(Difficulty::Hard.depth(), SearchDepth::Unbounded);
        assert_eq!(Difficulty::iter().count(), 3);
    }

    #[test]
    fn test_player_kind_parsing() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!(" Random ".parse::<PlayerKind>().unwrap(), PlayerKind::Random);
        assert_eq!(
            "minimax".parse::<PlayerKind>().unwrap(),
            PlayerKind::Minimax {
                difficulty: Difficulty::Hard
            }
        );
        assert_eq!(
            "minimax:medium".parse::<PlayerKind>().unwrap(),
            PlayerKind::Minimax {
                difficulty: Difficulty::Medium
            }
        );
        assert!("minimax:impossible".parse::<PlayerKind>().is_err());
        assert!("robot".parse::<PlayerKind>().is_err());
        assert!("human:easy".parse::<PlayerKind>().is_err());
    }

    #[test]
    fn test_player_kind_display_round_trips() {
        for kind in [
            PlayerKind::Human,
            PlayerKind::Random,
            PlayerKind::Minimax {
                difficulty: Difficulty::Easy,
            },
        ] {
            assert_eq!(kind.to_string().parse::<PlayerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_validate_requires_both_sides() {
        let config = GameConfig::default().with_cross(PlayerKind::Human);
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("Nought"), "{err}");

        let config = config.with_nought(PlayerKind::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_players() {
        let config = GameConfig::new(
            PlayerKind::Human,
            PlayerKind::Minimax {
                difficulty: Difficulty::Easy,
            },
        )
        .with_seed(9);
        let (cross, nought) = config.build_players().unwrap();
        assert!(cross.takes_input());
        assert!(!nought.takes_input());
    }

    #[test]
    fn test_parse_toml() {
        let config: GameConfig = toml::from_str(
            r#"
            seed = 5
            cross = { type = "human" }
            nought = { type = "minimax", difficulty = "easy" }
            "#,
        )
        .unwrap();
        assert_eq!(config.cross(), &Some(PlayerKind::Human));
        assert_eq!(
            config.nought(),
            &Some(PlayerKind::Minimax {
                difficulty: Difficulty::Easy
            })
        );
        assert_eq!(config.seed(), &Some(5));
    }
}
