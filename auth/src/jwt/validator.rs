use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::crypto;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Validates tokens produced by [`super::TokenIssuer`].
///
/// The MAC is checked before any claim is read, so a forged payload is
/// never deserialized. Expiry is evaluated against the caller's clock
/// without leeway.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenValidator {
    /// Create a validator for tokens signed with `secret`.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Verify a token and return its claims.
    ///
    /// # Arguments
    /// * `token` - Compact JWT as presented by the client
    /// * `now` - Validation time
    ///
    /// # Errors
    /// * `BadSignature` - Structure is broken, algorithm differs or MAC mismatch
    /// * `Malformed` - Signature holds but the payload is not a valid claim set
    /// * `Expired` - `now` is at or past the `exp` claim
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.verify_signature(token)?;

        let claims = self.decode_claims(token)?;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn verify_signature(&self, token: &str) -> Result<(), TokenError> {
        let (message, signature) = token.rsplit_once('.').ok_or(TokenError::BadSignature)?;

        let header = decode_header(token).map_err(|_| TokenError::BadSignature)?;
        if header.alg != self.algorithm {
            return Err(TokenError::BadSignature);
        }

        match crypto::verify(signature, message.as_bytes(), &self.decoding_key, self.algorithm) {
            Ok(true) => Ok(()),
            Ok(false) | Err(_) => Err(TokenError::BadSignature),
        }
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked against the caller's clock in `validate`
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Malformed(e.to_string()))
    }
}
