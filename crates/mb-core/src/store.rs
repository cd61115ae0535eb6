//! Credential store capability consumed by the auth core.
//!
//! The identity service's database implements this trait; the auth layer
//! (credential service, local verifier) only ever sees the trait, which
//! keeps persistence an external collaborator and lets tests substitute
//! an in-memory store.

use crate::{Result, User};

use std::sync::Arc;

use async_trait::async_trait;

/// Fields required to create a user record. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Insert a new user. Concurrent creates with the same email must be
    /// resolved here: exactly one succeeds, the rest fail with
    /// [`crate::StoreError::EmailExists`].
    async fn create(&self, user: NewUser) -> Result<User>;
}

#[async_trait]
impl<T: CredentialStore + ?Sized> CredentialStore for Arc<T> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        (**self).find_by_email(email).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        (**self).find_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        (**self).create(user).await
    }
}
