use crate::{DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_TO_FILE, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file directory, relative to the config directory
    pub directory: String,
    /// Write to a log file instead of stderr
    pub to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            directory: DEFAULT_LOG_DIRECTORY.to_string(),
            to_file: DEFAULT_LOG_TO_FILE,
        }
    }
}
