use std::sync::Arc;

use identity_service::access::template::AccessTemplate;
use identity_service::config::Config;
use identity_service::credential::models::Secret;
use identity_service::credential::models::Username;
use identity_service::credential::ports::CredentialServicePort;
use identity_service::credential::service::CredentialService;
use identity_service::inbound::http::router::create_router;
use identity_service::inbound::http::router::TOKENS_PATH;
use identity_service::outbound::repositories::InMemoryCredentialRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "identity_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "identity-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        host = %config.server.host,
        http_port = config.server.http_port,
        seed_users = config.identity.users.len(),
        access_template = config.identity.access_template.as_deref().unwrap_or("embedded"),
        "Configuration loaded"
    );

    let access_template = match &config.identity.access_template {
        Some(path) => AccessTemplate::from_file(path)?,
        None => AccessTemplate::embedded()?,
    };
    let access_template = Arc::new(access_template);
    tracing::info!(
        services = access_template.document().access.service_catalog.len(),
        "Access template loaded"
    );

    let credential_repository = Arc::new(InMemoryCredentialRepository::new());
    let credential_service = Arc::new(CredentialService::new(credential_repository));

    for user in &config.identity.users {
        let token = credential_service
            .register(
                Username::new(user.username.clone()),
                Secret::new(user.secret.clone()),
            )
            .await?;
        tracing::info!(username = %user.username, token = %token, "Seeded user registered");
    }
    tracing::info!(
        registered_users = credential_service.registered_users().await?,
        "Credential store ready"
    );

    let http_address = format!("{}:{}", config.server.host, config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        path = TOKENS_PATH,
        "Http server listening"
    );

    let http_application = create_router(Arc::clone(&credential_service), access_template);

    match axum::serve(http_listener, http_application).await {
        Ok(()) => tracing::info!("Server exited successfully"),
        Err(e) => tracing::error!(error = %e, "Server error"),
    };

    Ok(())
}
