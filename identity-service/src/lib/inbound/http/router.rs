use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use crate::domain::access::template::AccessTemplate;
use crate::domain::credential::service::CredentialService;
use crate::outbound::repositories::InMemoryCredentialRepository;

/// Password login endpoint of the v2 identity API.
pub const TOKENS_PATH: &str = "/v2.0/tokens";

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<CredentialService<InMemoryCredentialRepository>>,
    pub access_template: Arc<AccessTemplate>,
}

pub fn create_router(
    credential_service: Arc<CredentialService<InMemoryCredentialRepository>>,
    access_template: Arc<AccessTemplate>,
) -> Router {
    let state = AppState {
        credential_service,
        access_template,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route(TOKENS_PATH, post(authenticate))
        .layer(trace_layer)
        .with_state(state)
}
