use planetary_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Map a SQLite unique-constraint failure to `UniqueViolation`, anything else to `Sqlx`
    #[track_caller]
    pub fn from_insert(source: sqlx::Error, constraint: &str) -> Self {
        let is_unique = source
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if is_unique {
            Self::UniqueViolation {
                constraint: constraint.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            Self::Sqlx {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
