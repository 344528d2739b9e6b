use auth::JwtError;
use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
///
/// Authentication and token variants keep their internal reason for
/// logging. The HTTP layer collapses them before anything leaves the service.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Login failures
    #[error("No credential for username: {0}")]
    CredentialNotFound(String),

    #[error("Password mismatch for username: {0}")]
    PasswordMismatch(String),

    // Token failures
    #[error("Token is malformed: {0}")]
    TokenMalformed(String),

    #[error("Token signature is invalid")]
    TokenBadSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token subject is not a known user: {0}")]
    UnknownIdentity(String),

    // Authorization failures
    #[error("User {identity} may not access resources of {requested}")]
    OwnershipMismatch { identity: String, requested: String },

    // Provisioning errors
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token issuance failed: {0}")]
    Jwt(#[from] JwtError),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<TokenError> for UserError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::BadSignature => UserError::TokenBadSignature,
            TokenError::Malformed(reason) => UserError::TokenMalformed(reason),
            TokenError::Expired => UserError::TokenExpired,
        }
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
