use mb_core::{ErrorLocation, StoreError};

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
}

impl DbError {
    /// Whether the underlying failure is a unique-constraint violation
    /// (for users: the email column).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Sqlx { source, .. } => source
                .as_database_error()
                .is_some_and(|e| e.is_unique_violation()),
            _ => false,
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

/// The credential-store seam: a duplicate email surfaces as
/// `StoreError::EmailExists`, everything else is an opaque backend failure.
impl From<DbError> for StoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        if e.is_unique_violation() {
            return StoreError::EmailExists {
                location: ErrorLocation::from(Location::caller()),
            };
        }

        StoreError::Backend {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
