use axum::extract::State;
use axum::Form;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::Credential;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// OAuth2 password grant: form-encoded credentials in, bearer token out.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(body): Form<TokenRequestBody>,
) -> Result<Json<TokenResponseData>, ApiError> {
    let credential = Credential::new(body.username, body.password);

    state
        .user_service
        .login(credential, Utc::now())
        .await
        .map_err(ApiError::from)
        .map(|token| Json(token.into()))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: AccessToken::TOKEN_TYPE.to_string(),
        }
    }
}
