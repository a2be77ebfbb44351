use std::fmt;

/// Username value type.
///
/// Any string is accepted; the store is keyed on the exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext secret registered for a user or presented at login.
///
/// `Debug` output is redacted so secrets never reach the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Opaque session token bound to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored credentials for one registered username.
///
/// Replaced wholesale on re-registration, never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub secret: Secret,
    pub token: SessionToken,
}

/// Credentials presented by a login attempt
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub username: Username,
    pub password: Secret,
}

impl LoginCredentials {
    pub fn new(username: Username, password: Secret) -> Self {
        Self { username, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::new("wonderland");
        assert_eq!(format!("{:?}", secret), "Secret(***)");
        assert_eq!(secret.expose(), "wonderland");
    }

    #[test]
    fn test_user_record_debug_hides_secret() {
        let record = UserRecord {
            secret: Secret::new("wonderland"),
            token: SessionToken::new("abc123"),
        };
        let rendered = format!("{:?}", record);
        assert!(!rendered.contains("wonderland"));
        assert!(rendered.contains("abc123"));
    }
}
