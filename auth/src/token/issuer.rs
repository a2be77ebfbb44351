use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes behind a token (rendered as twice as many hex characters).
pub const DEFAULT_TOKEN_BYTES: usize = 16;

/// Opaque session token generator.
///
/// Draws bytes from the operating system CSPRNG and renders them as
/// lowercase hexadecimal. Holds no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct TokenIssuer {
    byte_length: usize,
}

impl TokenIssuer {
    /// Create a token issuer producing 32 character tokens.
    ///
    /// # Returns
    /// TokenIssuer using `DEFAULT_TOKEN_BYTES` of entropy per token
    pub fn new() -> Self {
        Self::with_byte_length(DEFAULT_TOKEN_BYTES)
    }

    /// Create a token issuer with a custom amount of entropy.
    ///
    /// # Arguments
    /// * `byte_length` - Random bytes per token, the token is `2 * byte_length` characters
    ///
    /// # Returns
    /// Configured TokenIssuer instance
    pub fn with_byte_length(byte_length: usize) -> Self {
        Self { byte_length }
    }

    /// Generate a fresh token.
    ///
    /// # Returns
    /// Fixed-length lowercase hexadecimal string
    pub fn issue(&self) -> String {
        let mut bytes = vec![0u8; self.byte_length];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}
