use crate::secret::SecretVerifier;
use crate::token::TokenIssuer;

/// Credential coordinator combining token issuance and secret verification.
///
/// Tokens are issued once at registration; verification never mints a
/// new one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticator {
    token_issuer: TokenIssuer,
    secret_verifier: SecretVerifier,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl Authenticator {
    /// Create a new authenticator with the default token length.
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new() -> Self {
        Self::with_token_issuer(TokenIssuer::new())
    }

    /// Create an authenticator around a specific token issuer.
    ///
    /// # Arguments
    /// * `token_issuer` - Generator used for newly registered credentials
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn with_token_issuer(token_issuer: TokenIssuer) -> Self {
        Self {
            token_issuer,
            secret_verifier: SecretVerifier::new(),
        }
    }

    /// Issue a session token for a new registration.
    ///
    /// # Returns
    /// Fresh opaque token
    pub fn issue_token(&self) -> String {
        self.token_issuer.issue()
    }

    /// Verify a presented secret against the registered one.
    ///
    /// # Arguments
    /// * `presented` - Secret supplied by the caller
    /// * `stored_secret` - Secret recorded at registration
    ///
    /// # Returns
    /// Unit if the secrets match
    ///
    /// # Errors
    /// * `InvalidCredentials` - Secret does not match
    pub fn authenticate(
        &self,
        presented: &str,
        stored_secret: &str,
    ) -> Result<(), AuthenticationError> {
        if !self.secret_verifier.verify(presented, stored_secret) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(())
    }
}
