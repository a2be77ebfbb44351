pub mod verifier;

pub use verifier::SecretVerifier;
