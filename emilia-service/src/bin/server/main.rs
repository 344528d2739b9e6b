use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use emilia_service::assistant::action::ActionDispatcher;
use emilia_service::config::Config;
use emilia_service::domain::user::service::UserService;
use emilia_service::inbound::http::router::create_router;
use emilia_service::outbound::repositories::InMemoryCredentialStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emilia_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "emilia-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        users = config.users.len(),
        "Configuration loaded"
    );

    let credential_store = Arc::new(InMemoryCredentialStore::from_seeds(
        &config.users,
        &PasswordHasher::new(),
    )?);
    tracing::info!(
        users = credential_store.len(),
        "Credential store initialized"
    );

    let token_ttl = chrono::Duration::try_minutes(config.jwt.expiration_minutes)
        .ok_or_else(|| anyhow::anyhow!("jwt.expiration_minutes is out of range"))?;
    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes(), token_ttl));

    let user_service = Arc::new(UserService::new(credential_store, authenticator));
    let dispatcher = Arc::new(ActionDispatcher::default());

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, dispatcher);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
