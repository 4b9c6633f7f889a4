// Configuration loaded from YAML

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime settings for the fruitstore binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Load the example fruits at startup
    pub seed_examples: bool,
    /// Fallback tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Colorize terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_examples: true,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Default config location: `<config dir>/fruitstore/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fruitstore").join("config.yaml"))
    }

    /// Load config
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(eyre!("Config file not found: {}", path.display()));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Color override to force, if any
    ///
    /// Only a disabled `color` forces plain output; otherwise the terminal
    /// environment (`NO_COLOR`, `CLICOLOR`) decides.
    pub fn color_override(&self) -> Option<bool> {
        if self.color { None } else { Some(false) }
    }

    /// Parse a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = ?path, ?config, "Loaded config");
        Ok(config)
    }
}
