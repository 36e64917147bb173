use std::path::{Path, PathBuf};

use otiyot_core::{GameError, GameRules};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Unplayable rules in {path}")]
    Rules {
        path: PathBuf,
        #[source]
        source: GameError,
    },
}

/// Settings of the terminal host, read from a TOML file.
///
/// ```toml
/// sound = false
/// advance_delay_ms = 500
///
/// [rules]
/// max_lives = 5
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Where saved games and records live, defaults to `.otiyot` in the working directory.
    pub data_dir: Option<PathBuf>,
    pub sound: bool,
    pub haptics: bool,
    /// How long a solved word stays on screen before the next one is loaded.
    pub advance_delay_ms: u64,
    pub rules: GameRules,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            sound: true,
            haptics: false,
            advance_delay_ms: 1_200,
            rules: GameRules::default(),
        }
    }
}

impl HostConfig {
    pub const DEFAULT_DATA_DIR: &'static str = ".otiyot";

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;
        config.rules.validate().map_err(|source| ConfigError::Rules {
            path: path.to_owned(),
            source,
        })?;
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_DATA_DIR))
    }
}
