use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::credential::ports::CredentialServicePort;
use crate::inbound::http::extractors::LoginRequest;
use crate::inbound::http::router::AppState;

pub async fn authenticate(
    State(state): State<AppState>,
    request: LoginRequest,
) -> Result<ApiSuccess, ApiError> {
    if let Some(tenant_name) = &request.tenant_name {
        tracing::debug!(tenant_name = %tenant_name, "Tenant scope requested, serving fixture tenant");
    }
    let credentials = request.into_credentials();

    // Verify password and fetch the token issued at registration
    let token = state
        .credential_service
        .authenticate(&credentials)
        .await
        .map_err(|e| {
            tracing::warn!(username = %credentials.username, error = %e, "Login rejected");
            ApiError::from(e)
        })?;

    let document = state.access_template.build_success(&token);
    let response = ApiSuccess::encode(StatusCode::OK, &document)?;

    tracing::info!(username = %credentials.username, "Login succeeded");
    Ok(response)
}
