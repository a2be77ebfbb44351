use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

use super::errors::build_error;
use super::errors::json_response;
use super::extractors::ValidationError;
use crate::domain::credential::errors::CredentialError;

pub mod authenticate;

// Messages observed from real identity service deployments.
pub const NOT_JSON: &str = "Expecting to find application/json in Content-Type header. \
     The server could not comply with the request since it is either malformed \
     or otherwise incorrect. The client is assumed to be in error.";
pub const NOT_AUTHORIZED: &str = "The request you have made requires authentication.";
pub const INVALID_USER: &str = "Invalid user / password";

/// Encoded success body with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSuccess(StatusCode, Vec<u8>);

impl ApiSuccess {
    /// Encode `data` as the response body.
    ///
    /// # Errors
    /// * `InternalServerError` - Serialization failed
    pub fn encode<T: Serialize>(status: StatusCode, data: &T) -> Result<Self, ApiError> {
        serde_json::to_vec(data)
            .map(|body| ApiSuccess(status, body))
            .map_err(|e| ApiError::InternalServerError(e.to_string()))
    }
}

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        json_response(self.0, self.1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Unauthorized(String),
    /// Request body could not be read; answered with a bare 400.
    UnreadableBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::UnreadableBody => return json_response(StatusCode::BAD_REQUEST, Vec::new()),
        };

        let (status, body) = build_error(status, &message);
        json_response(status, body)
    }
}

impl From<ValidationError> for ApiError {
    fn from(_: ValidationError) -> Self {
        ApiError::BadRequest(NOT_JSON.to_string())
    }
}

impl From<CredentialError> for ApiError {
    fn from(err: CredentialError) -> Self {
        match err {
            CredentialError::UnknownUser(_) => ApiError::Unauthorized(NOT_AUTHORIZED.to_string()),
            CredentialError::InvalidSecret(_) => ApiError::Unauthorized(INVALID_USER.to_string()),
            CredentialError::Store(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}
