use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use serde::Serialize;

/// Sent when an error envelope cannot be encoded. Always valid JSON.
pub const FALLBACK_ERROR_BODY: &[u8] =
    br#"{"error":{"message":"Internal failure","code":500,"title":"Internal Server Error"}}"#;

/// Error body in the identity service's native shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub code: u16,
    pub title: String,
}

impl ErrorEnvelope {
    /// Build an envelope whose title is the status code's reason phrase.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                code: status.as_u16(),
                title: status.canonical_reason().unwrap_or("Unknown Error").to_string(),
            },
        }
    }
}

/// Encode an error envelope for `status`.
///
/// # Returns
/// The status and body to send; `500` with `FALLBACK_ERROR_BODY` if encoding fails
pub fn build_error(status: StatusCode, message: &str) -> (StatusCode, Vec<u8>) {
    encode_or_fallback(status, &ErrorEnvelope::new(status, message))
}

pub(crate) fn encode_or_fallback<T: Serialize>(
    status: StatusCode,
    envelope: &T,
) -> (StatusCode, Vec<u8>) {
    match serde_json::to_vec(envelope) {
        Ok(body) => (status, body),
        Err(e) => {
            tracing::error!(error = %e, status = status.as_u16(), "Failed to encode error envelope");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                FALLBACK_ERROR_BODY.to_vec(),
            )
        }
    }
}

/// Every response of the endpoint is labelled JSON and sized, failures included.
pub fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            ),
            (header::CONTENT_LENGTH, HeaderValue::from(body.len())),
        ],
        body,
    )
        .into_response()
}
