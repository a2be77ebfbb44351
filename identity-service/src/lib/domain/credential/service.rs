use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::credential::errors::CredentialError;
use crate::domain::credential::models::LoginCredentials;
use crate::domain::credential::models::Secret;
use crate::domain::credential::models::SessionToken;
use crate::domain::credential::models::UserRecord;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialRepository;
use crate::domain::credential::ports::CredentialServicePort;

/// Domain service implementation for credential operations.
///
/// Concrete implementation of CredentialServicePort over an injected store.
pub struct CredentialService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: auth::Authenticator,
}

impl<CR> CredentialService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential storage implementation
    ///
    /// # Returns
    /// Configured credential service instance
    pub fn new(repository: Arc<CR>) -> Self {
        Self::with_authenticator(repository, auth::Authenticator::new())
    }

    /// Create a credential service with a specific authenticator.
    ///
    /// # Arguments
    /// * `repository` - Credential storage implementation
    /// * `authenticator` - Token issuance and secret verification
    ///
    /// # Returns
    /// Configured credential service instance
    pub fn with_authenticator(repository: Arc<CR>, authenticator: auth::Authenticator) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Number of registered usernames.
    pub async fn registered_users(&self) -> Result<usize, CredentialError> {
        self.repository.count().await
    }
}

#[async_trait]
impl<CR> CredentialServicePort for CredentialService<CR>
where
    CR: CredentialRepository,
{
    async fn register(
        &self,
        username: Username,
        secret: Secret,
    ) -> Result<SessionToken, CredentialError> {
        let token = SessionToken::new(self.authenticator.issue_token());
        let record = UserRecord {
            secret,
            token: token.clone(),
        };

        let replaced = self.repository.upsert(username.clone(), record).await?;
        if replaced.is_some() {
            tracing::debug!(username = %username, "Replaced existing registration");
        } else {
            tracing::debug!(username = %username, "Registered new user");
        }

        Ok(token)
    }

    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, CredentialError> {
        let record = self
            .repository
            .find_by_username(&credentials.username)
            .await?
            .ok_or_else(|| CredentialError::UnknownUser(credentials.username.to_string()))?;

        self.authenticator
            .authenticate(credentials.password.expose(), record.secret.expose())
            .map_err(|_| CredentialError::InvalidSecret(credentials.username.to_string()))?;

        Ok(record.token)
    }
}
