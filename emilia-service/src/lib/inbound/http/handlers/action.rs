use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::router::AppState;

pub async fn handle_action(
    State(state): State<AppState>,
    Json(body): Json<ActionRequestBody>,
) -> Json<ActionResponseData> {
    let message = state.dispatcher.dispatch(&body.username, &body.action);

    tracing::debug!(username = %body.username, "Action dispatched");

    Json(ActionResponseData { message })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionRequestBody {
    username: String,
    action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponseData {
    pub message: String,
}
