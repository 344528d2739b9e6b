use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// Only the registered claims this service relies on are present.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username the token was issued to)
    pub sub: String,

    /// Expiration time
    pub exp: i64,

    /// Issued at
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` starting at `now`.
    ///
    /// Returns `None` when the expiration does not fit a timestamp.
    pub fn for_subject(subject: impl ToString, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;

        Some(Self {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        })
    }

    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// A token is expired from the second named by `exp` onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
