//! Session configuration loaded from an optional YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::PlayError;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "CHESSMATE_CONFIG";

/// Configuration knobs for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Directory holding `<name>.yml` save files.
    pub save_dir: PathBuf,
    /// Player name used for the computer opponent.
    pub computer_name: String,
    /// Seed for the computer's move choice; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("saved"),
            computer_name: "Computer".to_string(),
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Load the configuration at `path`, falling back to defaults when the
    /// path is `None` or the file does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, PlayError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the file named by `CHESSMATE_CONFIG`, if set.
    pub fn from_env() -> Result<Self, PlayError> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Parse a YAML document; missing fields keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, PlayError> {
        Ok(serde_yaml::from_str(content)?)
    }
}
