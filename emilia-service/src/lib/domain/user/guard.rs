use std::sync::Arc;

use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::CredentialStore;

/// Resolves bearer tokens to directory users and enforces ownership.
pub struct AuthGuard<CS>
where
    CS: CredentialStore,
{
    authenticator: Arc<Authenticator>,
    store: Arc<CS>,
}

impl<CS> AuthGuard<CS>
where
    CS: CredentialStore,
{
    pub fn new(authenticator: Arc<Authenticator>, store: Arc<CS>) -> Self {
        Self {
            authenticator,
            store,
        }
    }

    /// Validate `token` and map its subject to a directory user.
    ///
    /// Fails closed: a correctly signed token whose subject is not in the
    /// directory is rejected like a forged one.
    ///
    /// # Errors
    /// * `TokenBadSignature` / `TokenMalformed` / `TokenExpired` - Token rejected
    /// * `UnknownIdentity` - Subject is not a directory user
    pub async fn resolve_identity(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedIdentity, UserError> {
        let claims = self.authenticator.validate_token(token, now)?;

        let username = Username::new(claims.sub.clone())
            .map_err(|_| UserError::UnknownIdentity(claims.sub.clone()))?;

        let record = self
            .store
            .lookup(&username)
            .await?
            .ok_or(UserError::UnknownIdentity(claims.sub))?;

        Ok(AuthenticatedIdentity {
            username: record.username,
        })
    }

    /// Allow access only to resources owned by `identity`.
    ///
    /// # Errors
    /// * `OwnershipMismatch` - `requested_owner` is someone else
    pub fn authorize(
        &self,
        identity: &AuthenticatedIdentity,
        requested_owner: &str,
    ) -> Result<(), UserError> {
        if identity.username.as_str() == requested_owner {
            Ok(())
        } else {
            Err(UserError::OwnershipMismatch {
                identity: identity.username.to_string(),
                requested: requested_owner.to_string(),
            })
        }
    }
}
