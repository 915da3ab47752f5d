//! Run configuration.
//!
//! Loaded from .toolshed.yml in the working directory or
//! ~/.config/toolshed/toolshed.yml, with CLI flags taking precedence
//! over whatever is loaded here.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for a catalog run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory holding one subdirectory per category.
    pub tools_root: PathBuf,

    /// Where the generated catalog is written.
    pub output: PathBuf,

    /// Extra debug output on the console.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tools_root: PathBuf::from("tools"),
            output: PathBuf::from("catalog.json"),
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .toolshed.yml in current directory
    /// 3. ~/.config/toolshed/toolshed.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // Explicit path takes precedence, and failing to load it is fatal
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project config
        let project_config = PathBuf::from(".toolshed.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .toolshed.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .toolshed.yml: {}", e);
                }
            }
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("toolshed").join("toolshed.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
