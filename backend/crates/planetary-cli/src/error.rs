use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while running a command
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: planetary_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: planetary_db::DbError,
        location: ErrorLocation,
    },
}

impl From<planetary_config::ConfigError> for CliError {
    #[track_caller]
    fn from(err: planetary_config::ConfigError) -> Self {
        CliError::Config {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<planetary_db::DbError> for CliError {
    #[track_caller]
    fn from(err: planetary_db::DbError) -> Self {
        CliError::Database {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
