use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::about::hello;
use super::handlers::about::topic_help;
use super::handlers::about::topic_info;
use super::handlers::action::handle_action;
use super::handlers::camelize::camelize;
use super::handlers::greet::greet;
use super::handlers::issue_token::issue_token;
use super::handlers::read_secret::read_secret;
use super::middleware::authenticate as auth_middleware;
use crate::domain::assistant::action::ActionDispatcher;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::user::InMemoryCredentialStore;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<InMemoryCredentialStore>>,
    pub dispatcher: Arc<ActionDispatcher>,
}

pub fn create_router(
    user_service: Arc<UserService<InMemoryCredentialStore>>,
    dispatcher: Arc<ActionDispatcher>,
) -> Router {
    let state = AppState {
        user_service,
        dispatcher,
    };

    let public_routes = Router::new()
        .route("/", get(hello))
        .route("/about/:topic", get(topic_info))
        .route("/about/:topic/help", get(topic_help))
        .route("/greet/:name", get(greet))
        .route("/camelize", post(camelize))
        .route("/action", post(handle_action))
        .route("/token", post(issue_token));

    let protected_routes = Router::new()
        .route("/users/:username/secret", get(read_secret))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
