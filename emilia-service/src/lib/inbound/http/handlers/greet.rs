use axum::extract::Path;
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::domain::assistant::greeting;

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    language: Option<String>,
}

pub async fn greet(Path(name): Path<String>, Query(query): Query<GreetQuery>) -> Json<String> {
    let language = query
        .language
        .as_deref()
        .unwrap_or(greeting::DEFAULT_LANGUAGE);

    Json(greeting::greet(&name, language))
}
