use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::guard::AuthGuard;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::Credential;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::CredentialStore;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
    guard: AuthGuard<CS>,
}

impl<CS> UserService<CS>
where
    CS: CredentialStore,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User directory
    /// * `authenticator` - Password and token primitives bound to the signing key
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        let guard = AuthGuard::new(Arc::clone(&authenticator), Arc::clone(&store));
        Self {
            store,
            authenticator,
            guard,
        }
    }
}

#[async_trait]
impl<CS> UserServicePort for UserService<CS>
where
    CS: CredentialStore,
{
    async fn login(
        &self,
        credential: Credential,
        now: DateTime<Utc>,
    ) -> Result<AccessToken, UserError> {
        let Credential { username, password } = credential;

        // A name that cannot exist in the directory takes the unknown-user path
        let record = match Username::new(username.clone()) {
            Ok(valid) => self.store.lookup(&valid).await?,
            Err(_) => None,
        };

        // Argon2 work runs off the async workers
        let authenticator = Arc::clone(&self.authenticator);

        let Some(record) = record else {
            // A failed join still answers like any unknown user
            let _ = tokio::task::spawn_blocking(move || {
                authenticator.reject_unknown_account(&password)
            })
            .await;
            return Err(UserError::CredentialNotFound(username));
        };

        let password_hash = record.password_hash.clone();
        let subject = record.username.to_string();
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &password_hash, &subject, now)
        })
        .await
        .map_err(|e| UserError::Unknown(e.to_string()))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => UserError::PasswordMismatch(username.clone()),
            AuthenticationError::JwtError(err) => UserError::Jwt(err),
        })?;

        tracing::info!(
            username = %record.username,
            expires_at = %result.expires_at,
            "Access token issued"
        );

        Ok(AccessToken {
            access_token: result.access_token,
            expires_at: result.expires_at,
        })
    }

    async fn resolve_identity(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedIdentity, UserError> {
        self.guard.resolve_identity(token, now).await
    }

    async fn read_secret(
        &self,
        identity: &AuthenticatedIdentity,
        owner: &str,
    ) -> Result<String, UserError> {
        self.guard.authorize(identity, owner)?;

        self.store
            .lookup(&identity.username)
            .await?
            .map(|record| record.secret)
            .ok_or(UserError::UnknownIdentity(identity.username.to_string()))
    }
}
