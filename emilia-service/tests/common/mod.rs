use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenIssuer;
use chrono::Duration;
use emilia_service::assistant::action::ActionDispatcher;
use emilia_service::config::UserSeedConfig;
use emilia_service::domain::user::service::UserService;
use emilia_service::inbound::http::router::create_router;
use emilia_service::outbound::repositories::InMemoryCredentialStore;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

pub const FELIX_PASSWORD: &str = "elm>javascript";
pub const FELIX_SECRET: &str = "Rust 🦀 is the best programming language ever!";
pub const STEFAN_PASSWORD: &str = "decent-espresso-by-john-buckmann";
pub const STEFAN_SECRET: &str = "I love pressure-profiled espresso ☕!";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
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

        let seeds = [
            seed("stefan", "stefan.buchkremer@meetap.de", STEFAN_PASSWORD, STEFAN_SECRET),
            seed("felix", "felix.andreas@meetap.de", FELIX_PASSWORD, FELIX_SECRET),
        ];
        let store = Arc::new(
            InMemoryCredentialStore::from_seeds(&seeds, &PasswordHasher::new())
                .expect("Failed to build credential store"),
        );

        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, Duration::minutes(30)));
        let user_service = Arc::new(UserService::new(store, authenticator));

        let router = create_router(user_service, Arc::new(ActionDispatcher::default()));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(JWT_SECRET, Duration::minutes(30)),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Log in through the token endpoint
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the access token, panicking on failure
    pub async fn access_token(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }
}

fn seed(username: &str, email: &str, password: &str, secret: &str) -> UserSeedConfig {
    UserSeedConfig {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        secret: secret.to_string(),
    }
}
