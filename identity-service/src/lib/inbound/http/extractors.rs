use axum::async_trait;
use axum::body::Bytes;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::http::header;
use serde::Deserialize;
use serde::Deserializer;
use thiserror::Error;

use super::handlers::ApiError;
use crate::domain::credential::models::LoginCredentials;
use crate::domain::credential::models::Secret;
use crate::domain::credential::models::Username;

/// The only media type the login endpoint accepts.
pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Malformed login body: {0}")]
    MalformedBody(String),
}

/// Decoded password login.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: Username,
    pub password: Secret,
    /// Informational only; the response tenant comes from the template.
    pub tenant_name: Option<String>,
}

impl LoginRequest {
    pub fn into_credentials(self) -> LoginCredentials {
        LoginCredentials::new(self.username, self.password)
    }
}

/// Wire shape: `{"auth": {"passwordCredentials": {...}, "tenantName": ...}}`
///
/// Absent or `null` members decode to empty values; only non-JSON bodies and
/// members of the wrong type are rejected.
#[derive(Debug, Default, Deserialize)]
struct LoginRequestBody {
    #[serde(default, deserialize_with = "null_as_default")]
    auth: AuthBody,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthBody {
    #[serde(default, deserialize_with = "null_as_default")]
    password_credentials: PasswordCredentials,
    tenant_name: Option<String>,
}

#[derive(Default, Deserialize)]
struct PasswordCredentials {
    #[serde(default, deserialize_with = "null_as_default")]
    username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    password: String,
}

impl std::fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Check the declared media type. Only the exact value `application/json` is accepted.
pub fn validate_content_type(content_type: Option<&str>) -> Result<(), ValidationError> {
    match content_type {
        Some(JSON_MEDIA_TYPE) => Ok(()),
        declared => Err(ValidationError::UnsupportedMediaType(
            declared.unwrap_or_default().to_string(),
        )),
    }
}

/// Decode a login body; extra fields are ignored.
pub fn decode_login_request(body: &[u8]) -> Result<LoginRequest, ValidationError> {
    let body: LoginRequestBody = serde_json::from_slice::<Option<LoginRequestBody>>(body)
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))?
        .unwrap_or_default();
    let credentials = body.auth.password_credentials;

    Ok(LoginRequest {
        username: Username::new(credentials.username),
        password: Secret::new(credentials.password),
        tenant_name: body.auth.tenant_name,
    })
}

#[async_trait]
impl<S> FromRequest<S> for LoginRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        // The media type is checked before the body is touched.
        validate_content_type(content_type.as_deref()).map_err(|e| {
            tracing::warn!(error = %e, "Login rejected");
            ApiError::from(e)
        })?;

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(error = %rejection, "Failed to read login body");
            ApiError::UnreadableBody
        })?;

        decode_login_request(&body).map_err(|e| {
            tracing::warn!(error = %e, "Login rejected");
            ApiError::from(e)
        })
    }
}
