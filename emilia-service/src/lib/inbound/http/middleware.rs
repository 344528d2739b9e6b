use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use super::handlers::ApiError;
use super::handlers::INVALID_TOKEN_MESSAGE;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Middleware that validates bearer tokens and adds the identity to request extensions
///
/// Handlers behind it extract `Extension<AuthenticatedIdentity>`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let identity = state
        .user_service
        .resolve_identity(token, Utc::now())
        .await
        .map_err(ApiError::from)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let unauthorized = || ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string());

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::debug!("Missing Authorization header");
            unauthorized()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not visible ASCII");
        unauthorized()
    })?;

    match auth_str.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => {
            tracing::debug!("Authorization header is not a bearer credential");
            Err(unauthorized())
        }
    }
}
