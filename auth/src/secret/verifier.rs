use subtle::ConstantTimeEq;

/// Compares a presented secret with the one recorded at registration.
///
/// Equal-length inputs are compared in constant time, so timing does not
/// reveal the position of the first mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretVerifier;

impl SecretVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Check a presented secret against the stored one.
    ///
    /// # Arguments
    /// * `presented` - Secret supplied by the caller
    /// * `stored` - Secret recorded at registration
    ///
    /// # Returns
    /// True if both secrets are byte-for-byte identical
    pub fn verify(&self, presented: &str, stored: &str) -> bool {
        presented.as_bytes().ct_eq(stored.as_bytes()).unwrap_u8() == 1
    }
}
