use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::AccessToken;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::models::Credential;
use crate::domain::user::models::UserRecord;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Exchange a username and password for a bearer token.
    ///
    /// # Arguments
    /// * `credential` - Username and plaintext password
    /// * `now` - Issuance time
    ///
    /// # Returns
    /// Access token valid for the configured lifetime
    ///
    /// # Errors
    /// * `CredentialNotFound` - No such user (or the username is not well-formed)
    /// * `PasswordMismatch` - Password does not match the stored hash
    /// * `Jwt` - Token could not be encoded
    async fn login(&self, credential: Credential, now: DateTime<Utc>)
        -> Result<AccessToken, UserError>;

    /// Resolve the identity behind a bearer token.
    ///
    /// # Errors
    /// * `TokenBadSignature` - Structure or MAC check failed
    /// * `TokenMalformed` - Claims could not be decoded
    /// * `TokenExpired` - Token lifetime is over
    /// * `UnknownIdentity` - Subject is not in the directory
    async fn resolve_identity(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedIdentity, UserError>;

    /// Read the secret of `owner` on behalf of `identity`.
    ///
    /// # Errors
    /// * `OwnershipMismatch` - `identity` is not `owner`
    /// * `UnknownIdentity` - Owner vanished from the directory
    async fn read_secret(
        &self,
        identity: &AuthenticatedIdentity,
        owner: &str,
    ) -> Result<String, UserError>;
}

/// Read-only access to the user directory.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve a user record by username.
    ///
    /// Exact, case-sensitive match.
    ///
    /// # Returns
    /// Optional user record (None if not found)
    async fn lookup(&self, username: &Username) -> Result<Option<UserRecord>, UserError>;
}
