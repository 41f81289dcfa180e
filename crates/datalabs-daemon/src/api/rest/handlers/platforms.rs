//! Platform lifecycle handlers

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use datalabs_types::{Platform, PlatformId, PlatformSpec};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Placeholder SQL returned until the query agent exists
pub const PLACEHOLDER_SQL: &str = "SELECT * FROM events WHERE ...";

/// List all platforms
#[utoipa::path(
    get,
    path = "/api/v1/platforms",
    responses((status = 200, description = "Registered platforms in creation order", body = [Platform])),
    tag = "platforms"
)]
pub async fn list_platforms(State(state): State<AppState>) -> ApiResult<Json<Vec<Platform>>> {
    let platforms = state.storage.list()?;
    Ok(Json(platforms))
}

/// Get a specific platform
#[utoipa::path(
    get,
    path = "/api/v1/platforms/{id}",
    params(("id" = String, Path, description = "Platform id, e.g. plat_1")),
    responses(
        (status = 200, description = "Platform record", body = Platform),
        (status = 404, description = "Platform not found", body = ErrorResponse)
    ),
    tag = "platforms"
)]
pub async fn get_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Platform>> {
    let platform = state
        .storage
        .get(&PlatformId::new(id))?
        .ok_or_else(ApiError::platform_not_found)?;

    Ok(Json(platform))
}

/// Create a new platform
///
/// `requirements` and `config` are accepted but have no effect on the
/// stored record.
#[utoipa::path(
    post,
    path = "/api/v1/platforms",
    request_body = PlatformSpec,
    responses(
        (status = 200, description = "Platform created", body = Platform),
        (status = 500, description = "Registry failure", body = ErrorResponse)
    ),
    tag = "platforms"
)]
pub async fn create_platform(
    State(state): State<AppState>,
    Json(spec): Json<PlatformSpec>,
) -> ApiResult<Json<Platform>> {
    tracing::info!(name = %spec.name, "Creating platform");

    if !spec.requirements.is_empty() {
        tracing::debug!(requirements = %spec.requirements, "Platform requirements not yet used");
    }
    if !spec.config.is_empty() {
        tracing::debug!(keys = ?spec.config.keys(), "Ignoring requested platform config");
    }

    let platform = state.storage.create(spec).map_err(|e| {
        tracing::error!(error = %e, "Error creating platform");
        ApiError::Internal(e.to_string())
    })?;

    tracing::info!(platform_id = %platform.id, "Platform created");

    Ok(Json(platform))
}

/// Delete response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// Delete a platform
#[utoipa::path(
    delete,
    path = "/api/v1/platforms/{id}",
    params(("id" = String, Path, description = "Platform id, e.g. plat_1")),
    responses(
        (status = 200, description = "Platform deleted", body = DeleteResponse),
        (status = 404, description = "Platform not found", body = ErrorResponse)
    ),
    tag = "platforms"
)]
pub async fn delete_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let platform_id = PlatformId::new(id);

    if !state.storage.delete(&platform_id)? {
        return Err(ApiError::platform_not_found());
    }

    tracing::info!(platform_id = %platform_id, "Platform deleted");

    Ok(Json(DeleteResponse {
        message: "Platform deleted successfully".to_string(),
    }))
}

/// Natural-language query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlatformQueryParams {
    pub natural_query: String,
}

/// One row of a query result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RevenueRow {
    pub date: String,
    pub revenue: u64,
}

/// Natural-language query response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlatformQueryResponse {
    pub query: String,
    pub sql: String,
    pub results: Vec<RevenueRow>,
}

/// Query a platform in natural language
///
/// No translation or execution happens yet: any query against a registered
/// platform yields the same placeholder SQL and sample rows.
#[utoipa::path(
    post,
    path = "/api/v1/platforms/{id}/query",
    params(
        ("id" = String, Path, description = "Platform id, e.g. plat_1"),
        PlatformQueryParams
    ),
    responses(
        (status = 200, description = "Generated SQL and results", body = PlatformQueryResponse),
        (status = 404, description = "Platform not found", body = ErrorResponse)
    ),
    tag = "platforms"
)]
pub async fn query_platform(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PlatformQueryParams>,
) -> ApiResult<Json<PlatformQueryResponse>> {
    let platform_id = PlatformId::new(id);

    if !state.storage.contains(&platform_id)? {
        return Err(ApiError::platform_not_found());
    }

    tracing::info!(platform_id = %platform_id, query = %params.natural_query, "Platform query");

    Ok(Json(PlatformQueryResponse {
        query: params.natural_query,
        sql: PLACEHOLDER_SQL.to_string(),
        results: sample_rows(),
    }))
}

fn sample_rows() -> Vec<RevenueRow> {
    vec![
        RevenueRow {
            date: "2025-01-01".to_string(),
            revenue: 1000,
        },
        RevenueRow {
            date: "2025-01-02".to_string(),
            revenue: 1200,
        },
    ]
}
