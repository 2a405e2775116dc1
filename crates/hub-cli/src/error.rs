use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] hub_config::ConfigError),

    #[error(transparent)]
    Session(#[from] hub_session::SessionError),

    #[error(transparent)]
    Core(#[from] hub_core::CoreError),

    #[error("Unknown route: {path} {location}")]
    UnknownRoute {
        path: String,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl CliError {
    /// Creates UnknownRoute error at caller location.
    #[track_caller]
    pub fn unknown_route(path: impl Into<String>) -> Self {
        Self::UnknownRoute {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliErrorResult<T> = std::result::Result<T, CliError>;
