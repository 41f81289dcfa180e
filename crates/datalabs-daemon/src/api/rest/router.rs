//! API Router configuration

use super::handlers;
use super::openapi::openapi_json;
use super::state::AppState;
use crate::config::DaemonConfig;
use crate::metrics::metrics_handler;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, config: &DaemonConfig) -> Router {
    let api_routes = Router::new()
        // Platforms
        .route(
            "/platforms",
            get(handlers::list_platforms).post(handlers::create_platform),
        )
        .route(
            "/platforms/",
            get(handlers::list_platforms).post(handlers::create_platform),
        )
        .route(
            "/platforms/:id",
            get(handlers::get_platform).delete(handlers::delete_platform),
        )
        .route("/platforms/:id/query", post(handlers::query_platform))
        // Agents
        .route("/agents/query", post(handlers::query_agent))
        .route("/agents/design", post(handlers::design_agent))
        // Data
        .route("/data/ingest", post(handlers::ingest_data))
        .route("/data/query", get(handlers::query_data))
        // Monitoring
        .route("/monitoring/metrics", get(handlers::get_platform_metrics))
        .route("/monitoring/alerts", get(handlers::get_platform_alerts));

    let mut router = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(handlers::DOCS_PATH, get(openapi_json))
        .nest("/api/v1", api_routes);

    if config.metrics.enabled {
        router = router.route("/metrics", get(metrics_handler));
    }

    // Build router with middleware
    let mut router = router
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    if config.server.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.with_state(state)
}
