use axum::Json;
use serde_json::Map;
use serde_json::Value;

use crate::domain::assistant::camelize::camelize_keys;

/// Rename snake_case keys of a flat JSON object to camelCase.
pub async fn camelize(Json(body): Json<Map<String, Value>>) -> Json<Map<String, Value>> {
    Json(camelize_keys(body))
}
