use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenValidator;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and token issuance/validation over one signing key.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_validator: TokenValidator,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,

    /// Instant the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(jwt_secret, token_ttl),
            token_validator: TokenValidator::new(jwt_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Burn one password verification for an account that does not exist.
    pub fn reject_unknown_account(&self, password: &str) {
        self.password_hasher.verify_decoy(password);
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity the token is issued to
    /// * `now` - Issuance time
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match or hash is unusable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject, now)?)
    }

    /// Generate JWT token without password verification.
    ///
    /// Only for subjects that have already been authenticated by other means.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticationResult, JwtError> {
        let (access_token, claims) = self.token_issuer.issue(subject, now)?;

        let expires_at = claims
            .expires_at()
            .ok_or_else(|| JwtError::EncodingFailed("expiration out of range".to_string()))?;

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Validate and decode JWT token.
    ///
    /// # Errors
    /// * `TokenError` - Signature, structure or expiry check failed
    pub fn validate_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.token_validator.validate(token, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Duration::minutes(30))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let now = Utc::now();

        // Hash a password
        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        // Authenticate with correct password
        let result = authenticator
            .authenticate(password, &hash, "user123", now)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(result.expires_at.timestamp(), (now + Duration::minutes(30)).timestamp());

        // Validate the token
        let decoded = authenticator
            .validate_token(&result.access_token, now)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, "user123");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        // Try with wrong password
        let result = authenticator.authenticate("wrong_password", &hash, "user123", Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_with_corrupt_hash() {
        let result = authenticator().authenticate("my_password", "not-a-phc-string", "user123", Utc::now());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issued_token_expires_after_ttl() {
        let authenticator = authenticator();
        let issued_at = Utc::now();

        let result = authenticator
            .issue_token("felix", issued_at)
            .expect("Failed to generate token");

        assert!(authenticator
            .validate_token(&result.access_token, issued_at + Duration::minutes(29))
            .is_ok());
        assert_eq!(
            authenticator
                .validate_token(&result.access_token, issued_at + Duration::minutes(31))
                .unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here", Utc::now());
        assert_eq!(result.unwrap_err(), TokenError::BadSignature);
    }
}
