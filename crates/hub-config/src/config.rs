use crate::{ConfigError, ConfigErrorResult, LogLevel, LoggingConfig, StorageConfig};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

const CONFIG_FILENAME: &str = "config.toml";
const LOG_FILENAME: &str = "gamehub.log";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GAMEHUB_CONFIG_DIR env var, else use ./.gamehub/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GAMEHUB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GAMEHUB_CONFIG_DIR env var > ./.gamehub/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("GAMEHUB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".gamehub"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("GAMEHUB_STORAGE_DIR") {
            self.storage.dir = dir;
        }
        if let Ok(level) = std::env::var("GAMEHUB_LOG_LEVEL") {
            // FromStr never fails, unknown values fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Storage and log paths must stay inside the config dir
        let storage_path = Path::new(&self.storage.dir);
        if self.storage.dir.is_empty()
            || storage_path.is_absolute()
            || self.storage.dir.contains("..")
        {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        let log_path = Path::new(&self.logging.directory);
        if log_path.is_absolute() || self.logging.directory.contains("..") {
            return Err(ConfigError::logging(
                "logging.directory must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path to the session storage directory.
    pub fn storage_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(&self.storage.dir))
    }

    /// Absolute path to the log file, when file logging is enabled.
    pub fn log_file(&self) -> Result<Option<PathBuf>, ConfigError> {
        if !self.logging.to_file {
            return Ok(None);
        }
        let dir = Self::config_dir()?.join(&self.logging.directory);
        Ok(Some(dir.join(LOG_FILENAME)))
    }
}
