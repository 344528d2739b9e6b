//! Authentication utilities library
//!
//! Provides the credential and token primitives behind the service:
//! - Password hashing (Argon2id)
//! - Signed access tokens (HS256 JWT) with caller-supplied clock
//! - Authentication coordination
//!
//! The service defines its own ports and adapts these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenIssuer, TokenValidator};
//! use chrono::{Duration, Utc};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret, Duration::minutes(30));
//! let now = Utc::now();
//! let (token, _) = issuer.issue("felix", now).unwrap();
//!
//! let claims = TokenValidator::new(secret).validate(&token, now).unwrap();
//! assert_eq!(claims.sub, "felix");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::{Duration, Utc};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//!
//! // Provision: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let now = Utc::now();
//! let result = auth.authenticate("password123", &hash, "felix", now).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token, now).unwrap();
//! assert_eq!(claims.sub, "felix");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
