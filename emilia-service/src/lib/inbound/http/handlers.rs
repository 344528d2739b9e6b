use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::UserError;

pub mod about;
pub mod action;
pub mod camelize;
pub mod greet;
pub mod issue_token;
pub mod read_secret;

/// Body of every failed login, whatever the reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect username or password";

/// Body of every rejected bearer token, whatever the reason.
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid authentication credentials";

pub const FORBIDDEN_MESSAGE: &str = "Not allowed to access resources of another user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        tracing::error!(error = %e, "Unhandled error");
        Self::InternalServerError("Internal server error".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        let mut response =
            (status, Json(ApiResponseBody::new_error(status, message))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// Collapse domain errors into what a client may learn.
///
/// Every authentication and token failure maps onto one fixed message;
/// the precise reason only reaches the logs.
impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::CredentialNotFound(_) | UserError::PasswordMismatch(_) => {
                tracing::warn!(reason = %err, "Login rejected");
                ApiError::Unauthorized(LOGIN_FAILED_MESSAGE.to_string())
            }
            UserError::TokenMalformed(_)
            | UserError::TokenBadSignature
            | UserError::TokenExpired
            | UserError::UnknownIdentity(_) => {
                tracing::warn!(reason = %err, "Bearer token rejected");
                ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
            }
            UserError::OwnershipMismatch {
                ref identity,
                ref requested,
            } => {
                tracing::warn!(
                    identity = %identity,
                    requested = %requested,
                    "Access to foreign resource denied"
                );
                ApiError::Forbidden(FORBIDDEN_MESSAGE.to_string())
            }
            // Provisioning errors only arise while seeding the store at startup
            UserError::UsernameAlreadyExists(_)
            | UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::Password(_)
            | UserError::Jwt(_)
            | UserError::Unknown(_) => {
                tracing::error!(error = %err, "Internal failure");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::JwtError;

    use super::*;
    use crate::user::errors::UsernameError;

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let unknown = ApiError::from(UserError::CredentialNotFound("nobody".to_string()));
        let mismatch = ApiError::from(UserError::PasswordMismatch("felix".to_string()));

        assert_eq!(unknown, mismatch);
        assert_eq!(
            unknown,
            ApiError::Unauthorized(LOGIN_FAILED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_token_failures_are_indistinguishable() {
        let expected = ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string());

        for err in [
            UserError::TokenMalformed("missing field `exp`".to_string()),
            UserError::TokenBadSignature,
            UserError::TokenExpired,
            UserError::UnknownIdentity("ghost".to_string()),
        ] {
            assert_eq!(ApiError::from(err), expected);
        }
    }

    #[test]
    fn test_ownership_mismatch_is_forbidden() {
        let err = ApiError::from(UserError::OwnershipMismatch {
            identity: "felix".to_string(),
            requested: "stefan".to_string(),
        });

        assert_eq!(err, ApiError::Forbidden(FORBIDDEN_MESSAGE.to_string()));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::from(UserError::Jwt(JwtError::EncodingFailed(
            "key rejected".to_string(),
        )));

        assert_eq!(
            err,
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }

    #[test]
    fn test_provisioning_errors_are_internal() {
        let expected = ApiError::InternalServerError("Internal server error".to_string());

        assert_eq!(
            ApiError::from(UserError::UsernameAlreadyExists("felix".to_string())),
            expected
        );
        assert_eq!(
            ApiError::from(UserError::InvalidUsername(UsernameError::InvalidCharacters)),
            expected
        );
    }

    #[test]
    fn test_unauthorized_response_challenges_bearer() {
        let response = ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_forbidden_response_has_no_challenge() {
        let response = ApiError::Forbidden(FORBIDDEN_MESSAGE.to_string()).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
