use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Reason a presented token was rejected.
///
/// The distinction is meant for diagnostics. Callers facing the network
/// should collapse every variant into one generic answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token signature does not verify")]
    BadSignature,

    #[error("Token claims are malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,
}
