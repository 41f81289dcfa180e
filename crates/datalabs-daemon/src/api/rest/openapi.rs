//! OpenAPI document for the REST API

use super::handlers;
use crate::error::ErrorResponse;
use axum::Json;
use datalabs_types::{Platform, PlatformConfig, PlatformSpec, PlatformStatus, RequestedPlatformConfig};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Data Labs API",
        description = "AI-driven data infrastructure platform"
    ),
    paths(
        handlers::root,
        handlers::health_check,
        handlers::list_platforms,
        handlers::create_platform,
        handlers::get_platform,
        handlers::delete_platform,
        handlers::query_platform,
        handlers::query_agent,
        handlers::design_agent,
        handlers::ingest_data,
        handlers::query_data,
        handlers::get_platform_metrics,
        handlers::get_platform_alerts,
    ),
    components(schemas(
        Platform,
        PlatformConfig,
        PlatformStatus,
        PlatformSpec,
        RequestedPlatformConfig,
        ErrorResponse,
        handlers::DeleteResponse,
        handlers::RevenueRow,
        handlers::PlatformQueryResponse,
        handlers::QueryAgentResponse,
        handlers::DesignAgentResponse,
        handlers::IngestResponse,
        handlers::DataQueryResponse,
        handlers::PlatformMetrics,
        handlers::MetricsResponse,
        handlers::AlertsResponse,
        handlers::HealthCheckResponse,
        handlers::WelcomeResponse,
    )),
    tags(
        (name = "platforms", description = "Platform registry"),
        (name = "agents", description = "Query and design agents"),
        (name = "data", description = "Data ingestion and SQL"),
        (name = "monitoring", description = "Platform metrics and alerts"),
        (name = "service", description = "Landing and health")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
