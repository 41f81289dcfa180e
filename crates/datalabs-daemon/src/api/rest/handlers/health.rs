//! Health and landing handlers

use crate::api::rest::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "ai-data-labs-api";

/// Where the OpenAPI document is served
pub const DOCS_PATH: &str = "/api/docs";

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub service: String,
}

/// Health check endpoint
///
/// Independent of registry state; only reports that the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthCheckResponse)),
    tag = "service"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub health: String,
}

/// Root endpoint
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome object", body = WelcomeResponse)),
    tag = "service"
)]
pub async fn root(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "AI Data Labs - AI-Driven Data Infrastructure".to_string(),
        version: state.version.clone(),
        docs: DOCS_PATH.to_string(),
        health: "/health".to_string(),
    })
}
