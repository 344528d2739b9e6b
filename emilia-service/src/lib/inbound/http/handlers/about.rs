use axum::extract::Path;
use axum::Json;

use super::ApiError;
use crate::domain::assistant::messages::Topic;
use crate::domain::assistant::messages::HELLO;

pub async fn hello() -> Json<&'static str> {
    Json(HELLO)
}

pub async fn topic_info(Path(topic): Path<String>) -> Result<Json<&'static str>, ApiError> {
    parse_topic(&topic).map(|topic| Json(topic.info()))
}

pub async fn topic_help(Path(topic): Path<String>) -> Result<Json<&'static str>, ApiError> {
    parse_topic(&topic).map(|topic| Json(topic.help()))
}

fn parse_topic(topic: &str) -> Result<Topic, ApiError> {
    topic.parse::<Topic>().map_err(ApiError::NotFound)
}
