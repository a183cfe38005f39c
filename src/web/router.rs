//! Router configuration for the board API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, list_threads, report_reply,
    report_thread, thread_detail, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let thread_routes = Router::new().route(
        "/threads/:board",
        get(list_threads)
            .post(create_thread)
            .put(report_thread)
            .delete(delete_thread),
    );

    let reply_routes = Router::new().route(
        "/replies/:board",
        get(thread_detail)
            .post(create_reply)
            .put(report_reply)
            .delete(delete_reply),
    );

    Router::new()
        .nest("/api", thread_routes.merge(reply_routes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
