use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{chat_handler, extract_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.uploads.max_body_bytes();

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler::<L>))
        .route("/api/extract-pdf", post(extract_handler::<L>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
