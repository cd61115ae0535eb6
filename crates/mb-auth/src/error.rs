use mb_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    TokenDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Wrong password and unknown email collapse into this one variant so
    /// callers cannot probe for account existence.
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("User already exists {location}")]
    EmailTaken { location: ErrorLocation },

    /// Token decoded but the subject no longer exists in the store.
    #[error("Token subject not found {location}")]
    UnknownSubject { location: ErrorLocation },

    /// Any failure on the delegated verification path: network error,
    /// timeout, non-success status, or malformed body. Collapsed into a
    /// single variant so the peer's availability is never revealed to
    /// the end client.
    #[error("Delegated verification failed: {message} {location}")]
    Delegation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        AuthError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmailExists { .. } => AuthError::EmailTaken {
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::Backend { message, .. } => AuthError::Store {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
