mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

const DEFAULT_STORAGE_DIR: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_TO_FILE: bool = false;
