use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use crate::domain::user::models::AuthenticatedIdentity;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Return the secret of `username`, provided the caller is `username`.
pub async fn read_secret(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(username): Path<String>,
) -> Result<Json<String>, ApiError> {
    state
        .user_service
        .read_secret(&identity, &username)
        .await
        .map_err(ApiError::from)
        .map(Json)
}
