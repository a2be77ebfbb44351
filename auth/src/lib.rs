//! Credential utilities library
//!
//! Provides the credential primitives used by the test identity service:
//! - Opaque session token issuance (OS randomness, hex encoded)
//! - Constant-time secret comparison
//! - Authentication coordination
//!
//! Services keep their own ports and storage and adapt these implementations.
//!
//! # Examples
//!
//! ## Token Issuance
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new();
//! let token = issuer.issue();
//! assert_eq!(token.len(), 32);
//! ```
//!
//! ## Secret Verification
//! ```
//! use auth::SecretVerifier;
//!
//! let verifier = SecretVerifier::new();
//! assert!(verifier.verify("wonderland", "wonderland"));
//! assert!(!verifier.verify("wrong", "wonderland"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, AuthenticationError};
//!
//! let auth = Authenticator::new();
//!
//! // Register: issue the token once and keep it with the secret
//! let token = auth.issue_token();
//!
//! // Login: verify the secret, then hand back the stored token
//! assert!(auth.authenticate("wonderland", "wonderland").is_ok());
//! assert_eq!(token.len(), 32);
//!
//! let rejected = auth.authenticate("wrong", "wonderland");
//! assert_eq!(rejected, Err(AuthenticationError::InvalidCredentials));
//! ```

pub mod authenticator;
pub mod secret;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use secret::SecretVerifier;
pub use token::TokenIssuer;
pub use token::DEFAULT_TOKEN_BYTES;
