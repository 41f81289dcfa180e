//! Data ingestion and query handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiResult, ErrorResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Parameters identifying the target platform
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngestParams {
    pub platform_id: String,
}

/// Ingest acknowledgement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngestResponse {
    pub status: String,
    pub message: String,
}

/// Ingest data into a platform
///
/// The payload is accepted as-is and dropped.
#[utoipa::path(
    post,
    path = "/api/v1/data/ingest",
    params(IngestParams),
    responses(
        (status = 200, description = "Payload accepted", body = IngestResponse),
        (status = 404, description = "Unknown platform (strict mode only)", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn ingest_data(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
    Json(data): Json<Value>,
) -> ApiResult<Json<IngestResponse>> {
    state.check_platform_ref(&params.platform_id)?;

    tracing::info!(platform_id = %params.platform_id, "Ingesting data for platform");
    tracing::debug!(fields = payload_width(&data), "Ingest payload received");

    Ok(Json(IngestResponse {
        status: "success".to_string(),
        message: "Data ingestion implementation pending".to_string(),
    }))
}

fn payload_width(data: &Value) -> usize {
    match data {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        Value::Null => 0,
        _ => 1,
    }
}

/// Data query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DataQueryParams {
    pub platform_id: String,
    pub sql: String,
}

/// Data query response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataQueryResponse {
    pub sql: String,
    #[schema(value_type = Vec<Object>)]
    pub results: Vec<Value>,
    pub message: String,
}

/// Run SQL against platform data
///
/// The statement is echoed back unparsed; results are always empty.
#[utoipa::path(
    get,
    path = "/api/v1/data/query",
    params(DataQueryParams),
    responses(
        (status = 200, description = "Statement echoed", body = DataQueryResponse),
        (status = 404, description = "Unknown platform (strict mode only)", body = ErrorResponse)
    ),
    tag = "data"
)]
pub async fn query_data(
    State(state): State<AppState>,
    Query(params): Query<DataQueryParams>,
) -> ApiResult<Json<DataQueryResponse>> {
    state.check_platform_ref(&params.platform_id)?;

    tracing::info!(platform_id = %params.platform_id, "Querying data for platform");

    Ok(Json(DataQueryResponse {
        sql: params.sql,
        results: Vec::new(),
        message: "Data query implementation pending".to_string(),
    }))
}
