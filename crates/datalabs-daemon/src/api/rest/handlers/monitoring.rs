//! Platform monitoring handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiResult, ErrorResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Parameters identifying the monitored platform
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MonitoringParams {
    pub platform_id: String,
}

/// Platform performance counters
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformMetrics {
    pub queries_per_second: u64,
    pub avg_latency_ms: u64,
    pub storage_usage_bytes: u64,
}

/// Metrics response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    pub platform_id: String,
    pub metrics: PlatformMetrics,
    pub message: String,
}

/// Get platform metrics (always zero for now)
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/metrics",
    params(MonitoringParams),
    responses(
        (status = 200, description = "Platform counters", body = MetricsResponse),
        (status = 404, description = "Unknown platform (strict mode only)", body = ErrorResponse)
    ),
    tag = "monitoring"
)]
pub async fn get_platform_metrics(
    State(state): State<AppState>,
    Query(params): Query<MonitoringParams>,
) -> ApiResult<Json<MetricsResponse>> {
    state.check_platform_ref(&params.platform_id)?;

    tracing::info!(platform_id = %params.platform_id, "Fetching metrics for platform");

    Ok(Json(MetricsResponse {
        platform_id: params.platform_id,
        metrics: PlatformMetrics::default(),
        message: "Metrics implementation pending".to_string(),
    }))
}

/// Alerts response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AlertsResponse {
    pub platform_id: String,
    #[schema(value_type = Vec<Object>)]
    pub alerts: Vec<Value>,
    pub message: String,
}

/// Get active alerts for a platform (always empty for now)
#[utoipa::path(
    get,
    path = "/api/v1/monitoring/alerts",
    params(MonitoringParams),
    responses(
        (status = 200, description = "Active alerts", body = AlertsResponse),
        (status = 404, description = "Unknown platform (strict mode only)", body = ErrorResponse)
    ),
    tag = "monitoring"
)]
pub async fn get_platform_alerts(
    State(state): State<AppState>,
    Query(params): Query<MonitoringParams>,
) -> ApiResult<Json<AlertsResponse>> {
    state.check_platform_ref(&params.platform_id)?;

    tracing::info!(platform_id = %params.platform_id, "Fetching alerts for platform");

    Ok(Json(AlertsResponse {
        platform_id: params.platform_id,
        alerts: Vec::new(),
        message: "Alerts implementation pending".to_string(),
    }))
}
