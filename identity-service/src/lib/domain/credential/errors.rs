use thiserror::Error;

/// Top-level error for all credential operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialError {
    // Domain-level errors
    #[error("No credentials registered for user: {0}")]
    UnknownUser(String),

    #[error("Invalid secret for user: {0}")]
    InvalidSecret(String),

    // Infrastructure errors
    #[error("Credential store error: {0}")]
    Store(String),
}

