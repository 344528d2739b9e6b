use chrono::DateTime;
use chrono::Duration;
use chrono::SubsecRound;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues signed, time-bounded access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Issuance never looks at any user
/// directory; callers authenticate the subject before asking for a token.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    /// * `ttl` - Lifetime of every token issued by [`TokenIssuer::issue`]
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a token for `subject` expiring `ttl` after `now`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<(String, Claims), JwtError> {
        self.issue_with_ttl(subject, now, self.ttl)
    }

    /// Issue a token with an explicit lifetime.
    ///
    /// Claims carry whole seconds, so `now` is truncated first; the returned
    /// claims describe exactly the window the token is accepted in.
    ///
    /// # Returns
    /// The encoded token together with the claims it carries
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration out of range or token encoding failed
    pub fn issue_with_ttl(
        &self,
        subject: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<(String, Claims), JwtError> {
        let claims = Claims::for_subject(subject, now.trunc_subsecs(0), ttl)
            .ok_or_else(|| JwtError::EncodingFailed("expiration out of range".to_string()))?;
        let header = Header::new(self.algorithm);

        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))?;

        Ok((token, claims))
    }
}
