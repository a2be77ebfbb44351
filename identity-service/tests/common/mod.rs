use std::sync::Arc;

use identity_service::access::template::AccessTemplate;
use identity_service::credential::models::Secret;
use identity_service::credential::models::Username;
use identity_service::credential::ports::CredentialServicePort;
use identity_service::credential::service::CredentialService;
use identity_service::inbound::http::router::create_router;
use identity_service::inbound::http::router::TOKENS_PATH;
use identity_service::outbound::repositories::InMemoryCredentialRepository;

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub credential_service: Arc<CredentialService<InMemoryCredentialRepository>>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let credential_repository = Arc::new(InMemoryCredentialRepository::new());
        let credential_service = Arc::new(CredentialService::new(credential_repository));
        let access_template =
            Arc::new(AccessTemplate::embedded().expect("Failed to parse access template"));

        let router = create_router(Arc::clone(&credential_service), access_template);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            credential_service,
            api_client: reqwest::Client::new(),
        }
    }

    /// Register credentials the way a test harness seeds accounts
    pub async fn register(&self, username: &str, secret: &str) -> String {
        self.credential_service
            .register(Username::new(username), Secret::new(secret))
            .await
            .expect("Failed to register user")
            .into_inner()
    }

    /// Helper to make POST request to the token endpoint
    pub fn post_tokens(&self) -> reqwest::RequestBuilder {
        self.api_client
            .post(format!("{}{}", self.address, TOKENS_PATH))
    }

    /// Helper to POST a password login with the JSON content type
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post_tokens()
            .json(&serde_json::json!({
                "auth": {
                    "passwordCredentials": {
                        "username": username,
                        "password": password
                    }
                }
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
