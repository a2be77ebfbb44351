use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::LoginCredentials;
use crate::domain::credential::models::Secret;
use crate::domain::credential::models::SessionToken;
use crate::domain::credential::models::UserRecord;
use crate::domain::credential::models::Username;

/// Port for credential domain service operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a username with its secret and issue its session token.
    ///
    /// Registering an existing username silently replaces the previous
    /// secret and token.
    ///
    /// # Arguments
    /// * `username` - Username to register
    /// * `secret` - Secret the user will log in with
    ///
    /// # Returns
    /// Newly issued session token
    ///
    /// # Errors
    /// * `Store` - Credential store operation failed
    async fn register(
        &self,
        username: Username,
        secret: Secret,
    ) -> Result<SessionToken, CredentialError>;

    /// Verify login credentials.
    ///
    /// Read-only: the returned token is the one issued at registration.
    ///
    /// # Arguments
    /// * `credentials` - Username and password presented by the caller
    ///
    /// # Returns
    /// Session token bound to the registration
    ///
    /// # Errors
    /// * `UnknownUser` - Username was never registered
    /// * `InvalidSecret` - Password does not match the registered secret
    /// * `Store` - Credential store operation failed
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, CredentialError>;
}

/// Storage operations for registered credentials.
///
/// Implementations must make each call atomic with respect to concurrent
/// callers.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Insert or replace the record for a username.
    ///
    /// # Arguments
    /// * `username` - Key of the record
    /// * `record` - Secret and token to store
    ///
    /// # Returns
    /// The record that was replaced, if any
    ///
    /// # Errors
    /// * `Store` - Storage operation failed
    async fn upsert(
        &self,
        username: Username,
        record: UserRecord,
    ) -> Result<Option<UserRecord>, CredentialError>;

    /// Retrieve the record for a username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional record (None if never registered)
    ///
    /// # Errors
    /// * `Store` - Storage operation failed
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, CredentialError>;

    /// Number of registered usernames.
    ///
    /// # Errors
    /// * `Store` - Storage operation failed
    async fn count(&self) -> Result<usize, CredentialError>;
}
