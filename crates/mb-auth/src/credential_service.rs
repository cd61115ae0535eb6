use crate::{AuthError, JwtCodec, PasswordHasher, Result as AuthErrorResult};

use mb_core::{CredentialStore, NewUser, User};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Login input. Fields are optional so absence is reported as a 400
/// validation error rather than a body-parse rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Registration input.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Outcome of a successful registration.
#[derive(Debug)]
pub struct Registration {
    pub user: User,
    pub token: String,
}

/// Credential validation, password hashing, and token minting.
///
/// Validation runs cheapest-check-first: presence, then shape, then store
/// lookup, then the argon2 comparison, so malformed input never costs a
/// store read or a hash.
pub struct CredentialService<S> {
    store: S,
    codec: Arc<JwtCodec>,
    hasher: Arc<PasswordHasher>,
}

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

impl<S: CredentialStore> CredentialService<S> {
    pub fn new(store: S, codec: Arc<JwtCodec>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            store,
            codec,
            hasher,
        }
    }

    /// Validate credentials and mint a token for the account.
    pub async fn login(&self, request: &LoginRequest) -> AuthErrorResult<String> {
        let (Some(email), Some(password)) = (request.email.as_deref(), request.password.as_deref())
        else {
            return Err(AuthError::validation(
                "Email and password are required",
                None,
            ));
        };

        validate_email(email)?;
        validate_password(password)?;

        // Unknown email and wrong password must be indistinguishable.
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.codec.mint(user.id, &user.email)?;
        log::info!("User {} logged in", user.id);

        Ok(token)
    }

    /// Create an account and mint its first token.
    pub async fn register(&self, request: &RegisterRequest) -> AuthErrorResult<Registration> {
        let (Some(name), Some(email), Some(password)) = (
            request.name.as_deref(),
            request.email.as_deref(),
            request.password.as_deref(),
        ) else {
            return Err(AuthError::validation(
                "Name, email and password are required",
                None,
            ));
        };

        if name.len() < MIN_NAME_LEN {
            return Err(AuthError::validation("Name is too short", Some("name")));
        }
        validate_email(email)?;
        validate_password(password)?;

        // Pre-check keeps the conflict response ahead of the hashing cost;
        // the store's uniqueness constraint remains the authority when two
        // registrations race past this read.
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let password_hash = self.hasher.hash(password)?;

        let user = self
            .store
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let token = self.codec.mint(user.id, &user.email)?;
        log::info!("Registered user {} ({})", user.id, user.email);

        Ok(Registration { user, token })
    }
}

#[track_caller]
fn validate_password(password: &str) -> AuthErrorResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::validation(
            "Password must be at least 6 characters long",
            Some("password"),
        ));
    }
    Ok(())
}

#[track_caller]
fn validate_email(email: &str) -> AuthErrorResult<()> {
    if !is_valid_email(email) {
        return Err(AuthError::validation("Invalid email format", Some("email")));
    }
    Ok(())
}

/// `local@domain.tld` shape check: alphanumeric/`._%+-` local part, a
/// host, and an alphabetic TLD of at least two characters.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        && !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}
