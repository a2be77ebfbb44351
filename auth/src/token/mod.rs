pub mod issuer;

pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_TOKEN_BYTES;
