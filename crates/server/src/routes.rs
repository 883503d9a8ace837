use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::ServerState;

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod posts;
pub mod shoots;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: public routes plus the session-gated API.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    let api = Router::new()
        .route("/clients", get(clients::list_clients).post(clients::create_client))
        .route("/clients/:id", get(clients::get_client))
        .route("/shoots", get(shoots::list_shoots).post(shoots::schedule_shoot))
        .route("/shoots/:id", get(shoots::get_shoot))
        .route("/posts", get(posts::list_posts))
        .route("/dashboard/summary", get(dashboard::summary))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_session));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求一个 span，INFO 级别，不记录 header
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应时记录状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
