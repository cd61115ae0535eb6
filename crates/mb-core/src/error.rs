use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

/// Failures surfaced by a [`crate::CredentialStore`] implementation.
///
/// The store is the single authority on email uniqueness: a duplicate
/// insert must come back as `EmailExists`, never as a generic backend
/// error, so that callers can map it to a conflict response.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Email is already registered {location}")]
    EmailExists { location: ErrorLocation },

    #[error("Credential store failure: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, StoreError>;
