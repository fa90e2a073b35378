use std::path::Path;
use std::str::FromStr;

use crate::ai::AlgorithmKind;
use crate::error::ConfigError;
use crate::game::{GameState, Player, DEFAULT_COLS, DEFAULT_ROWS};

/// Default search depth when a player spec names an algorithm without one.
pub const DEFAULT_DEPTH: usize = 4;

const MIN_DIMENSION: usize = 4;
const MAX_DIMENSION: usize = 16;
const MAX_DEPTH: usize = 12;

/// One side of the match: a human, or a search algorithm with a depth budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerConfig {
    Human,
    Ai { algorithm: AlgorithmKind, depth: usize },
}

impl PlayerConfig {
    pub fn describe(&self) -> String {
        match self {
            PlayerConfig::Human => "Human".to_string(),
            PlayerConfig::Ai { algorithm, depth } => {
                format!("{} (depth {depth})", algorithm.name())
            }
        }
    }
}

/// Command-line form: "human", "random", or "negamax:5" / "sss:3" with an
/// optional depth suffix.
impl FromStr for PlayerConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, depth) = match s.split_once(':') {
            Some((kind, depth)) => {
                let depth: usize = depth.parse().map_err(|_| {
                    ConfigError::Validation(format!("invalid depth in player spec '{s}'"))
                })?;
                (kind, depth)
            }
            None => (s, DEFAULT_DEPTH),
        };

        let config = match kind.to_ascii_lowercase().as_str() {
            "human" => PlayerConfig::Human,
            "negamax" | "neg" => PlayerConfig::Ai {
                algorithm: AlgorithmKind::Negamax,
                depth,
            },
            "sss" => PlayerConfig::Ai {
                algorithm: AlgorithmKind::Sss,
                depth,
            },
            "random" => PlayerConfig::Ai {
                algorithm: AlgorithmKind::Random,
                depth,
            },
            other => {
                return Err(ConfigError::Validation(format!(
                    "unknown player kind '{other}', expected human, negamax, sss, or random"
                )))
            }
        };
        Ok(config)
    }
}

/// Match setup, loadable from TOML. Fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rows: usize,
    pub cols: usize,
    pub starting_player: Player,
    pub red: PlayerConfig,
    pub yellow: PlayerConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            starting_player: Player::Red,
            red: PlayerConfig::Human,
            yellow: PlayerConfig::Ai {
                algorithm: AlgorithmKind::Negamax,
                depth: DEFAULT_DEPTH,
            },
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_DIMENSION || self.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "rows must be between {MIN_DIMENSION} and {MAX_DIMENSION}"
            )));
        }
        if self.cols < MIN_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "cols must be between {MIN_DIMENSION} and {MAX_DIMENSION}"
            )));
        }
        for (side, player) in [("red", self.red), ("yellow", self.yellow)] {
            if let PlayerConfig::Ai { depth, .. } = player {
                if depth == 0 {
                    return Err(ConfigError::Validation(format!(
                        "{side}.depth must be >= 1"
                    )));
                }
                if depth > MAX_DEPTH {
                    return Err(ConfigError::Validation(format!(
                        "{side}.depth must be <= {MAX_DEPTH}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// The empty game state this configuration describes.
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.rows, self.cols, self.starting_player)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&MatchConfig::default()).expect("default config serializes")
    }
}
